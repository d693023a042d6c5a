//! Charge CLI
//!
//! Command-line interface for the Charge API.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use charge_client::ChargeClient;
use charge_types::{Address, CreditCard, Money, Order, OrderItem, Product};

#[derive(Parser)]
#[command(name = "charge")]
#[command(author, version, about = "Charge API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Charge API
    #[arg(long, env = "CHARGE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Charge a credit card
    Charge {
        #[command(flatten)]
        amount: AmountArgs,
        #[command(flatten)]
        card: CardArgs,
    },
    /// Place an order (charge plus confirmation email)
    Order {
        /// Email address for the confirmation
        #[arg(long)]
        email: String,
        /// Order identifier
        #[arg(long)]
        order_id: String,
        #[command(flatten)]
        address: AddressArgs,
        #[command(flatten)]
        amount: AmountArgs,
        #[command(flatten)]
        card: CardArgs,
    },
    /// Check API health
    Health,
}

#[derive(Args)]
struct AmountArgs {
    /// Currency code (ISO 4217)
    #[arg(long, default_value = "USD")]
    currency: String,
    /// Major units of the amount
    #[arg(long)]
    units: i64,
    /// Fractional nanos (0..=999999999)
    #[arg(long, default_value_t = 0)]
    nanos: i32,
}

#[derive(Args)]
struct CardArgs {
    /// Card number
    #[arg(long)]
    card_number: String,
    /// Card verification value
    #[arg(long)]
    cvv: String,
    /// Expiration month
    #[arg(long)]
    expiration_month: Option<u32>,
    /// Expiration year
    #[arg(long)]
    expiration_year: Option<u32>,
}

#[derive(Args)]
struct AddressArgs {
    #[arg(long, default_value = "")]
    street: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long, default_value = "")]
    country: String,
    #[arg(long, default_value = "")]
    zip_code: String,
}

impl AmountArgs {
    fn into_money(self) -> Result<Money> {
        Money::new(self.currency, self.units, self.nanos).map_err(Into::into)
    }
}

impl CardArgs {
    fn into_card(self) -> CreditCard {
        let card = CreditCard::new(self.card_number, Some(self.cvv));
        match (self.expiration_month, self.expiration_year) {
            (Some(month), Some(year)) => card.with_expiration(month, year),
            _ => card,
        }
    }
}

impl AddressArgs {
    fn into_address(self) -> Address {
        Address {
            street: self.street,
            city: self.city,
            state: self.state,
            country: self.country,
            zip_code: self.zip_code,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ChargeClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Charge { amount, card } => {
            let result = client
                .charge(amount.into_money()?, card.into_card())
                .await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Order {
            email,
            order_id,
            address,
            amount,
            card,
        } => {
            let amount = amount.into_money()?;
            let order = Order {
                order_id,
                shipping_address: address.into_address(),
                items: vec![OrderItem {
                    item: Product {
                        product_id: "cli-item".to_string(),
                        quantity: 1,
                    },
                    cost: amount.clone(),
                }],
            };
            let receipt = client
                .place_order(&email, order, amount, card.into_card())
                .await?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }

    Ok(())
}

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use stillwater::validation::Validation;
use storefront::api::{format_price, GraphQlClient};
use storefront::cart::{CartReducer, CartStore};
use storefront::model::{Product, ProductFilters};
use storefront::persist::PersistentStore;
use storefront::session::AuthSession;
use storefront::storage::FileStore;
use storefront::telemetry::init_tracing;
use storefront::validation::{validate_login, validate_register, LoginForm, RegisterForm};
use storefront::StorefrontConfig;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Shop from the terminal")]
struct Cli {
    /// GraphQL gateway, overrides STOREFRONT_API_URL
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        command: ProductsCommand,
    },
    Categories,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STOREFRONT_PASSWORD")]
        password: String,
    },
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "STOREFRONT_PASSWORD")]
        password: String,
    },
    Logout,
    Whoami,
}

#[derive(Subcommand, Debug)]
enum CartCommand {
    Show,
    Add {
        product_id: String,
        #[arg(long, short, default_value_t = 1)]
        quantity: u32,
    },
    Remove {
        product_id: String,
    },
    Set {
        product_id: String,
        quantity: u32,
    },
    Clear,
}

#[derive(Subcommand, Debug)]
enum ProductsCommand {
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Only featured products
        #[arg(long)]
        featured: bool,
    },
    Show {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = StorefrontConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let storage = FileStore::open(&config.data_dir)
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
    let client = GraphQlClient::new(config.api_url.clone());

    match cli.command {
        Command::Cart { command } => {
            let mut cart: CartStore<&FileStore> = PersistentStore::open(
                CartReducer::new(),
                &storage,
                config.cart_key.clone(),
                config.snapshot_format,
            );
            run_cart(&mut cart, &client, command).await?;
        }
        Command::Products { command } => run_products(&client, command).await?,
        Command::Categories => {
            for category in client.categories().await? {
                println!(
                    "{:<12} {:<24} {} products",
                    category.id, category.name, category.products_count
                );
            }
        }
        Command::Login { email, password } => {
            let form = LoginForm { email, password };
            let credentials = match validate_login(&form) {
                Validation::Success(credentials) => credentials,
                Validation::Failure(errors) => bail!(describe_errors(errors.iter())),
            };
            let mut session = AuthSession::new(client, &storage);
            let user = session.login(&credentials).await?;
            println!("signed in as {} <{}>", user.full_name(), user.email);
        }
        Command::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            let form = RegisterForm {
                first_name,
                last_name,
                email,
                confirm_password: password.clone(),
                password,
            };
            let data = match validate_register(&form) {
                Validation::Success(data) => data,
                Validation::Failure(errors) => bail!(describe_errors(errors.iter())),
            };
            let mut session = AuthSession::new(client, &storage);
            let user = session.register(&data).await?;
            println!("welcome, {}", user.full_name());
        }
        Command::Logout => {
            let mut session = AuthSession::new(client, &storage);
            session.logout();
            println!("signed out");
        }
        Command::Whoami => {
            let mut session = AuthSession::new(client, &storage);
            match &session.restore().await.user {
                Some(user) => println!("{} <{}> ({:?})", user.full_name(), user.email, user.role),
                None => println!("not signed in"),
            }
        }
    }

    Ok(())
}

async fn run_cart(
    cart: &mut CartStore<&FileStore>,
    client: &GraphQlClient,
    command: CartCommand,
) -> Result<()> {
    match command {
        CartCommand::Show => {}
        CartCommand::Add {
            product_id,
            quantity,
        } => {
            let Some(product) = client.product(&product_id).await? else {
                bail!("no product with id {product_id}");
            };
            cart.add_item(product, quantity);
        }
        CartCommand::Remove { product_id } => {
            if !cart.is_in_cart(&product_id) {
                bail!("{product_id} is not in the cart");
            }
            cart.remove_item(&product_id);
        }
        CartCommand::Set {
            product_id,
            quantity,
        } => {
            cart.update_quantity(&product_id, quantity);
        }
        CartCommand::Clear => {
            cart.clear();
        }
    }

    if cart.cart().is_empty() {
        println!("cart is empty");
        return Ok(());
    }
    for item in cart.items() {
        println!(
            "{:>3} x {:<32} {:>14}",
            item.quantity(),
            item.product().name,
            format_price(item.total_price())
        );
    }
    let summary = cart.summary();
    println!("{:>52}", format!("subtotal {}", format_price(summary.subtotal)));
    println!("{:>52}", format!("tax {}", format_price(summary.tax)));
    println!("{:>52}", format!("total {}", format_price(summary.total)));
    Ok(())
}

async fn run_products(client: &GraphQlClient, command: ProductsCommand) -> Result<()> {
    match command {
        ProductsCommand::List { featured: true, .. } => {
            for product in client.featured(None).await? {
                print_product_line(&product);
            }
        }
        ProductsCommand::List {
            search,
            category,
            page,
            limit,
            featured: false,
        } => {
            let filters = ProductFilters {
                category,
                page,
                limit,
                ..ProductFilters::default()
            };
            let result = match search {
                Some(term) => client.search(&term, &filters).await?,
                None => client.products(&filters).await?,
            };
            for product in &result.products {
                print_product_line(product);
            }
            println!(
                "page {} of {} ({} products)",
                result.page, result.total_pages, result.total
            );
        }
        ProductsCommand::Show { id } => {
            let Some(product) = client.product(&id).await? else {
                bail!("no product with id {id}");
            };
            println!("{} ({})", product.name, product.id);
            println!("price: {}", format_price(product.price));
            if let Some(original) = product.original_price.filter(|_| product.is_discounted()) {
                println!(
                    "was {} (-{}%)",
                    format_price(original),
                    storefront::api::discount_percent(original, product.price)
                );
            }
            println!("stock: {}", product.stock);
            if !product.image.is_empty() {
                println!("image: {}", client.image_url(&product.image));
            }
            if !product.description.is_empty() {
                println!("\n{}", product.description);
            }
        }
    }
    Ok(())
}

fn print_product_line(product: &Product) {
    println!(
        "{:<12} {:<32} {:>14}",
        product.id,
        product.name,
        format_price(product.price)
    );
}

fn describe_errors<'a>(errors: impl Iterator<Item = &'a storefront::validation::FieldError>) -> String {
    errors
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

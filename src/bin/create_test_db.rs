use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Duration, OffsetDateTime};

use expense_tracker::{
    Category, Expense, count_expenses, create_expense, initialize_db, open_database,
};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many months of expenses to generate, ending today.
    #[arg(long, short, default_value_t = 6)]
    months: u32,
}

const SAMPLE_EXPENSES: [(Category, &str, f64); 10] = [
    (Category::Food, "Groceries", 84.30),
    (Category::Transport, "Bus pass top up", 40.00),
    (Category::Food, "Lunch with friends", 27.50),
    (Category::Utilities, "Power bill", 132.18),
    (Category::Entertainment, "Movie tickets", 36.00),
    (Category::Shopping, "Running shoes", 149.99),
    (Category::Health, "Pharmacy", 18.75),
    (Category::Food, "Coffee beans", 22.00),
    (Category::Transport, "Fuel", 71.40),
    (Category::Other, "Birthday gift", 55.00),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = open_database(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample expenses...");

    let today = OffsetDateTime::now_utc().date();
    let days = i64::from(args.months) * 30;

    // Roughly one expense every three days, cycling through the samples.
    for (i, day) in (0..days).step_by(3).enumerate() {
        let (category, description, amount) = SAMPLE_EXPENSES[i % SAMPLE_EXPENSES.len()];
        // Vary amounts a little so months differ.
        let amount = amount * (1.0 + (i % 5) as f64 * 0.05);
        let date = today - Duration::days(day);

        create_expense(
            Expense::build(
                (amount * 100.0).round() / 100.0,
                category.as_str(),
                description,
                date,
            ),
            &conn,
        )?;
    }

    println!("Created {} expenses.", count_expenses(&conn)?);
    println!("Success!");

    Ok(())
}

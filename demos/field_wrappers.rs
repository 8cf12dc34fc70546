//! Field mediation demonstration.
//!
//! This example walks through four structs whose fields are routed through
//! `MediatedValue`:
//! 1. `Student`: every access logged
//! 2. `User`: username trimmed, including the initial value
//! 3. `Player`: speed clamped to 0..=100, with logging
//! 4. `Account`: balance history kept for the last ten writes
//!
//! Run with: `cargo run --example field_wrappers`

use mediated_field::{ConfigurationError, MediatedValue};

struct Student {
    grade: MediatedValue<f64>,
    credits: MediatedValue<u32>,
}

struct User {
    username: MediatedValue<String>,
}

struct Player {
    speed: MediatedValue<f64>,
}

struct Account {
    balance: MediatedValue<f64>,
}

impl Account {
    fn new(balance: f64) -> Result<Self, ConfigurationError> {
        Ok(Self {
            balance: MediatedValue::builder("balance", balance)
                .audited(mediated_field::DEFAULT_HISTORY_CAPACITY)
                .build()?,
        })
    }

    fn deposit(&mut self, amount: f64) {
        self.balance.update(|b| b + amount);
    }

    fn withdraw(&mut self, amount: f64) {
        self.balance.update(|b| b - amount);
    }

    fn audit(&self) {
        if let Some(history) = self.balance.projected().history() {
            for entry in history.iter() {
                println!("  {}  {:>8.2}", entry.recorded_at().to_rfc3339(), entry.value());
            }
        }
    }
}

fn main() -> Result<(), ConfigurationError> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Field Mediation Example ===\n");

    println!("--- Scenario 1: Logged Access ---");
    let mut student = Student {
        grade: MediatedValue::builder("grade", 75.0).logged().build()?,
        credits: MediatedValue::builder("credits", 0).logged().build()?,
    };
    student.grade.set(90.0);
    println!("grade: {}", student.grade.get());
    student.credits.update(|c| c + 1);
    println!("credits: {}", student.credits.get());

    println!("\n--- Scenario 2: Trimmed Input ---");
    let user = User {
        username: MediatedValue::builder("username", "ben   ".to_string())
            .trimmed()
            .build()?,
    };
    println!("[{}]", user.username.get());

    println!("\n--- Scenario 3: Clamped Range ---");
    let mut player = Player {
        speed: MediatedValue::builder("speed", 100.0)
            .logged()
            .clamped(0.0, 100.0)
            .build()?,
    };
    player.speed.set(25.0);
    player.speed.set(125.0);
    println!("speed after writing 125: {}", player.speed.get());

    println!("\n--- Scenario 4: Audit History ---");
    let mut account = Account::new(100.0)?;
    account.deposit(15.0);
    account.deposit(27.0);
    account.withdraw(75.0);
    println!("balance: {}", account.balance.get());
    account.audit();

    println!("\n=== Example Complete ===");
    Ok(())
}

// Example walking the registration form through a failed and then a
// successful submission with a console-backed presenter.
//
// Run with RUST_LOG=debug to watch the engine's per-field decisions.

use std::collections::HashMap;

use regform::{FieldId, FormController, FormPresenter, ValidationError};

/// Presenter that prints every state transition instead of rendering it.
#[derive(Default)]
struct ConsolePresenter {
    values: HashMap<FieldId, String>,
    country: String,
}

impl ConsolePresenter {
    fn type_into(&mut self, field: FieldId, value: &str) {
        println!("  [input] {} <- {:?}", field, value);
        self.values.insert(field, value.to_string());
    }

    fn select_country(&mut self, country: &str) {
        println!("  [input] country <- {:?}", country);
        self.country = country.to_string();
    }
}

impl FormPresenter for ConsolePresenter {
    fn field_value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn country_code(&self) -> String {
        self.country.clone()
    }

    fn apply_field_state(&mut self, field: FieldId, error: Option<&ValidationError>) {
        match error {
            Some(err) => println!("  [state] {}: ERROR - {}", field, err.message),
            None => println!("  [state] {}: ok", field),
        }
    }

    fn clear_field_states(&mut self) {
        println!("  [state] all field states cleared");
    }

    fn reset_inputs(&mut self) {
        self.values.clear();
        println!("  [state] inputs reset");
    }

    fn show_success_banner(&mut self) {
        println!("  [banner] visible");
    }

    fn hide_success_banner(&mut self) {
        println!("  [banner] hidden");
    }

    fn focus_field(&mut self, field: FieldId) {
        println!("  [focus] {}", field);
    }

    fn update_phone_placeholder(&mut self, example: &str) {
        println!("  [placeholder] phone <- {:?}", example);
    }
}

fn init_logging() {
    dotenv::dotenv().ok();
    let _ = tracing_log::LogTracer::init();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() {
    init_logging();
    tracing::info!("registration demo starting");

    println!("=== Registration Form Validation Demo ===\n");

    let mut controller = FormController::new(ConsolePresenter::default());

    println!("Filling the form with a UK phone under the US country rule:");
    let presenter = controller.presenter_mut();
    presenter.type_into(FieldId::FullName, "Jane Doe");
    presenter.type_into(FieldId::FatherName, "John Doe");
    presenter.type_into(FieldId::Dob, "1990-01-01");
    presenter.type_into(FieldId::Address, "123 Main Street");
    presenter.type_into(FieldId::Phone, "7123 456 789");
    presenter.select_country("US");

    println!("\nSubmitting:");
    let outcome = controller.submit();
    println!("  aggregate valid: {}", outcome.is_valid());
    println!("  summary: {}", outcome.error_summary());

    println!("\nSwitching the country to UK (placeholder follows the rule):");
    controller.presenter_mut().select_country("UK");
    controller.country_changed();

    println!("\nSubmitting again:");
    let outcome = controller.submit();
    println!("  aggregate valid: {}", outcome.is_valid());

    tracing::info!("registration demo finished");
}

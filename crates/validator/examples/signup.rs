//! Validating a signup form with a hand-built validator, a self-configuring
//! validator and the registry.
//!
//! Run with `RUST_LOG=rulekit_validator=debug` to see the engine's tracing.

use rulekit_validator::prelude::*;

#[derive(Debug, Clone)]
struct Address {
    city: String,
    postcode: String,
}

opaque_value!(Address);

#[derive(Debug, Clone)]
struct Signup {
    username: String,
    email: String,
    age: i32,
    website: Option<String>,
    address: Option<Address>,
    accepted_terms: bool,
}

fn address_rules() -> Result<ValidatorBuilder<Address>, ValidatorError> {
    let mut rules = ValidatorBuilder::new();
    rules.rule_for(property!(Address => city)).not_empty();
    rules
        .rule_for(property!(Address => postcode))
        .matches(r"^\d{4,5}$")?
        .with_message("{PropertyName} must have four or five digits");
    Ok(rules)
}

struct SignupValidator;

impl AbstractValidator for SignupValidator {
    type Model = Signup;

    fn config() -> ValidatorConfig {
        ValidatorConfig::default().with_name_style(NameStyle::Spaced)
    }

    fn configure(rules: &mut ValidatorBuilder<Signup>) -> Result<(), ValidatorError> {
        rules
            .rule_for(property!(Signup => username))
            .not_empty()
            .length(3, 16)
            .is_alphanumeric();
        rules.rule_for(property!(Signup => email)).is_email();
        rules
            .rule_for(property!(Signup => age))
            .greater_than_or_equal(18)
            .with_message("You must be an adult to sign up");
        rules
            .rule_for(property!(Signup => website))
            .only_if(|signup| signup.age >= 18)
            .is_url();
        rules
            .rule_for(property!(Signup => address))
            .not_null()
            .set_validator(address_rules()?);
        rules.rule_for(property!(Signup => accepted_terms)).is_true();
        Ok(())
    }
}

fn report(label: &str, result: &ValidResult) {
    if result.is_valid() {
        println!("{label}: valid");
        return;
    }
    println!("{label}: {} problem(s)", result.error_count());
    for message in result {
        println!("  - {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), ValidatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let good = Signup {
        username: "jan2024".into(),
        email: "jan@example.com".into(),
        age: 34,
        website: Some("https://jan.example.com".into()),
        address: Some(Address {
            city: "Oslo".into(),
            postcode: "0150".into(),
        }),
        accepted_terms: true,
    };
    let bad = Signup {
        username: "j!".into(),
        email: "jan.example.com".into(),
        age: 16,
        website: Some("not a url".into()),
        address: Some(Address {
            city: " ".into(),
            postcode: "AB1".into(),
        }),
        accepted_terms: false,
    };

    // A hand-built validator for a single field.
    let mut quick = ValidatorBuilder::<Signup>::new();
    quick
        .rule_for(property!(Signup => username))
        .not_empty()
        .min_length(3);
    report("quick check", &quick.validate(&bad));

    // A registry that resolves validators by model type.
    let mut registry = ValidatorRegistry::new();
    registry.register::<SignupValidator>()?;
    report("good signup", &registry.validate(&good)?);
    report("bad signup", &registry.validate(&bad)?);

    // Async checks run in place when validated asynchronously.
    let mut availability = ValidatorBuilder::<Signup>::new();
    availability
        .rule_for(property!(Signup => username))
        .must_async(|username: String| async move {
            tokio::task::yield_now().await;
            username != "admin"
        })
        .with_message("{PropertyName} is already taken");
    let taken = Signup {
        username: "admin".into(),
        ..good
    };
    let token = CancellationToken::new();
    report(
        "availability",
        &availability.validate_async(&taken, &token).await?,
    );

    Ok(())
}

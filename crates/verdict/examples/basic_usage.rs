//! Plain, non-reactive validation: compose conditions, fold them with
//! an operator, read the verdict.

use verdict::prelude::*;

fn main() -> Result<(), PatternError> {
    // Compose a username rule from the standard library.
    let username = required().and(min_length(3)).and(max_length(20));
    println!("'ada'   -> {}", username.evaluate(Some("ada")));
    println!("'a'     -> {}", username.evaluate(Some("a")));
    println!("absent  -> {}", username.evaluate(None::<&str>));

    // A validator holds many conditions and folds them; conjunction
    // reports the first failure.
    let validator: Validator<str> = Validator::new();
    validator.add_condition(required().shared());
    validator.add_condition(pattern(r"[a-z0-9_]+")?.with_message("lowercase only").shared());
    println!("'Ada'   -> {}", validator.validate(Some("Ada")));

    // Disjunction accepts when any single condition does.
    let contact: Validator<str> = Validator::with_operator(Disjunction);
    contact.add_condition(pattern(r"\+?\d{7,15}")?.with_message("not a phone").shared());
    contact.add_condition(pattern(r"[^@]+@[^@]+")?.with_message("not an email").shared());
    println!("email   -> {}", contact.validate(Some("ada@lovelace.dev")));
    println!("garbage -> {}", contact.validate(Some("???")));

    // Custom one-off rules are a closure away.
    let even = condition("must be even", |v: Option<&u32>| {
        v.is_some_and(|n| n % 2 == 0)
    });
    println!("4       -> {}", even.evaluate(Some(&4)));
    println!("5       -> {}", even.evaluate(Some(&5)));

    Ok(())
}

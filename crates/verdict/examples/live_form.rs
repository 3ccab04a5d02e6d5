//! A login form wired up reactively: two fields, each with its own live
//! validator, and a multiplexer deciding whether submit is enabled.

use std::rc::Rc;

use verdict::prelude::*;

fn main() {
    let username: Signal<String> = Signal::new();
    let password: Signal<String> = Signal::new();

    let username_ok = LiveValidator::new(&username);
    username_ok.add_condition(required().with_message("username is required").shared());
    username_ok.add_condition(min_length(3).with_message("username too short").shared());

    let password_ok = LiveValidator::new(&password);
    password_ok.add_condition(min_length(8).with_message("password too short").shared());

    // Field-level feedback, the way a UI would render inline errors.
    let _u = username_ok.state().subscribe(|verdict| {
        if let Some(v) = verdict {
            println!("  username: {v}");
        }
    });
    let _p = password_ok.state().subscribe(|verdict| {
        if let Some(v) = verdict {
            println!("  password: {v}");
        }
    });

    // Form-level: the submit button listens to the mux.
    let form = Mux::new();
    let _submit = form.state().subscribe(|verdict| {
        let enabled = verdict.is_some_and(Verdict::is_valid);
        println!("  submit enabled: {enabled}");
    });
    form.add_member(Rc::clone(&username_ok) as Rc<dyn VerdictSource>);
    form.add_member(Rc::clone(&password_ok) as Rc<dyn VerdictSource>);

    println!("typing username 'al'...");
    username.set("al".to_string());

    println!("typing username 'alice'...");
    username.set("alice".to_string());

    println!("typing password 'hunter2'...");
    password.set("hunter2".to_string());

    println!("typing password 'correct horse battery'...");
    password.set("correct horse battery".to_string());
}

use promptline::english::cap_first;
use promptline::logging::LoggerRegistry;
use promptline::menu::Menu;
use promptline::prompt::{
    BooleanPrompt, ListOptions, ListPrompt, PromptOutcome, SelectionPrompt,
};

struct DemoState {
    registry: LoggerRegistry,
}

fn main() {
    println!("------------------------------------------------------------");
    println!("promptline demo — validated prompts, menus, lists, logging");
    println!("------------------------------------------------------------");

    let mut state = DemoState {
        registry: LoggerRegistry::new(),
    };

    let menu = Menu::new()
        .entry("pick a color", |state: &mut DemoState| {
            let colors = ["red", "orange", "yellow", "green", "blue", "purple"];
            match SelectionPrompt::new().ask("Select a color", &colors) {
                PromptOutcome::Success(index) => {
                    println!("You picked {}", cap_first(colors[index]));
                    state
                        .registry
                        .request("demo")
                        .info(&format!("color = {}", colors[index]), &["menu"]);
                }
                PromptOutcome::Cancel => println!("Cancelled"),
                PromptOutcome::Error => println!("No valid answer"),
            }
        })
        .entry("build a target list", |state: &mut DemoState| {
            let prompt = ListPrompt::with_options(ListOptions {
                stop_token: "done".to_string(),
                minimum_amount: 1,
                maximum_amount: Some(5),
                allow_duplicates: false,
                ..ListOptions::default()
            });
            match prompt.ask("Enter up to 5 targets (type 'done' to finish)") {
                PromptOutcome::Success(targets) => {
                    println!("Collected: {}", targets.join(", "));
                    state
                        .registry
                        .request("demo")
                        .info(&format!("{} targets", targets.len()), &["menu"]);
                }
                PromptOutcome::Cancel => println!("Cancelled"),
                PromptOutcome::Error => println!("No valid answer"),
            }
        });

    loop {
        if menu.run("Main menu", &mut state).is_error() {
            break;
        }
        match BooleanPrompt::new().ask("Go again") {
            PromptOutcome::Success(true) => continue,
            _ => break,
        }
    }
}

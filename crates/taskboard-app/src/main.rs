//! taskboard - terminal client for the task backend
//!
//! Composition root: reads configuration, wires the HTTP client, store
//! and notifier into one [`AppContext`] and drives the controllers
//! from CLI subcommands.

use clap::{Arg, ArgAction, Command};
use std::io::Write;
use std::sync::Arc;
use taskboard_api::{ApiConfig, HttpTaskApi, TaskApi};
use taskboard_app::{
    render_state, AppContext, CreateTaskForm, SubmitOutcome, TaskCard, TracingNotifier,
};
use taskboard_model::{Task, ValidationErrors, GALLERY};

fn cli() -> Command {
    Command::new("taskboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Task-management client")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list").about("List tasks grouped by completion").arg(
                Arg::new("search")
                    .long("search")
                    .help("Keep only tasks whose title or description contains this text"),
            ),
        )
        .subcommand(
            Command::new("create")
                .about("Create a new task")
                .arg(Arg::new("title").long("title").required(true).help("Task title"))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .required(true)
                        .help("Task description"),
                )
                .arg(
                    Arg::new("image")
                        .long("image")
                        .action(ArgAction::Append)
                        .help("Image URL, or a gallery index (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Edit an existing task")
                .arg(Arg::new("id").required(true).help("Task identifier"))
                .arg(Arg::new("title").long("title").help("Replacement title"))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .help("Replacement description"),
                )
                .arg(
                    Arg::new("toggle-image")
                        .long("toggle-image")
                        .action(ArgAction::Append)
                        .help("Toggle an image URL or gallery index in the selection (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("toggle")
                .about("Flip a task's completion flag")
                .arg(Arg::new("id").required(true).help("Task identifier")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a task after confirmation")
                .arg(Arg::new("id").required(true).help("Task identifier"))
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
        .subcommand(Command::new("gallery").about("Show the built-in image gallery"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    // Fatal before anything else: no endpoint, no client.
    let config = ApiConfig::from_env()?;
    let api: Arc<dyn TaskApi> = Arc::new(HttpTaskApi::new(&config));
    let ctx = AppContext::new(api, Arc::new(TracingNotifier));

    match matches.subcommand() {
        Some(("list", args)) => {
            let search = args
                .get_one::<String>("search")
                .cloned()
                .unwrap_or_default();
            if ctx.store.fetch().await.is_err() {
                eprint!("{}", render_state(&ctx.store.state(), &search));
                anyhow::bail!("task list unavailable");
            }
            print!("{}", render_state(&ctx.store.state(), &search));
        }

        Some(("create", args)) => {
            let mut form = CreateTaskForm::new(Arc::clone(&ctx));
            if let Some(title) = args.get_one::<String>("title") {
                form.set_title(title);
            }
            if let Some(description) = args.get_one::<String>("description") {
                form.set_description(description);
            }
            for image in args.get_many::<String>("image").into_iter().flatten() {
                form.toggle_image(&resolve_image(image));
            }
            report_outcome(form.submit().await, "Task created.")?;
        }

        Some(("update", args)) => {
            let id = required_str(args, "id");
            let mut card = load_card(&ctx, id).await?;
            let form = card.open_editor();
            if let Some(title) = args.get_one::<String>("title") {
                form.set_title(title);
            }
            if let Some(description) = args.get_one::<String>("description") {
                form.set_description(description);
            }
            for image in args.get_many::<String>("toggle-image").into_iter().flatten() {
                form.toggle_image(&resolve_image(image));
            }
            match card.submit_editor().await {
                Some(outcome) => report_outcome(outcome, "Task updated.")?,
                None => anyhow::bail!("editor is not open"),
            }
        }

        Some(("toggle", args)) => {
            let id = required_str(args, "id");
            let card = load_card(&ctx, id).await?;
            if !card.toggle_completion().await {
                anyhow::bail!("could not update task {id}");
            }
            println!("Task {id} toggled.");
        }

        Some(("delete", args)) => {
            let id = required_str(args, "id");
            let mut card = load_card(&ctx, id).await?;
            card.request_delete();

            let confirmed = args.get_flag("yes") || confirm_on_stdin(card.task().title())?;
            if !confirmed {
                card.cancel_delete();
                println!("Cancelled.");
                return Ok(());
            }
            if !card.confirm_delete().await {
                anyhow::bail!("could not delete task {id}");
            }
            println!("Task {id} deleted.");
        }

        Some(("gallery", _)) => {
            for (index, url) in GALLERY.iter().enumerate() {
                println!("{index}: {url}");
            }
        }

        _ => unreachable!("clap enforces a known subcommand"),
    }

    Ok(())
}

fn required_str<'a>(args: &'a clap::ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map(String::as_str).unwrap_or_default()
}

/// A bare number picks from the built-in gallery; anything else is
/// taken as a literal URL.
fn resolve_image(arg: &str) -> String {
    arg.parse::<usize>()
        .ok()
        .and_then(|index| GALLERY.get(index))
        .map_or_else(|| arg.to_owned(), |url| (*url).to_owned())
}

async fn load_card(ctx: &Arc<AppContext>, id: &str) -> anyhow::Result<TaskCard> {
    let tasks = ctx.store.fetch().await?;
    let task: Task = tasks
        .iter()
        .find(|t| t.id().as_str() == id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no task with id {id}"))?;
    Ok(TaskCard::new(task, Arc::clone(ctx)))
}

fn report_outcome(outcome: SubmitOutcome, success: &str) -> anyhow::Result<()> {
    match outcome {
        SubmitOutcome::Accepted => {
            println!("{success}");
            Ok(())
        }
        SubmitOutcome::Rejected(errors) => {
            print_field_errors(&errors);
            anyhow::bail!("invalid task fields")
        }
        SubmitOutcome::Failed(message) => anyhow::bail!("request failed: {message}"),
        SubmitOutcome::InFlight => anyhow::bail!("a submission is already in flight"),
    }
}

fn print_field_errors(errors: &ValidationErrors) {
    if let Some(m) = &errors.title {
        eprintln!("title: {m}");
    }
    if let Some(m) = &errors.description {
        eprintln!("description: {m}");
    }
    if let Some(m) = &errors.images {
        eprintln!("images: {m}");
    }
}

fn confirm_on_stdin(title: &str) -> anyhow::Result<bool> {
    print!("Delete task {title:?}? This cannot be undone. [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

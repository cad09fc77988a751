mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use std::sync::mpsc;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use adapter::{spawn_stdin_queries, TerminalSearchView};
use cli::render::{render_desserts, render_detail, render_list, render_meals};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::RecipesCommand;
use ports::inbound::RunRecipesApp;
use wiring::{wire_recipes, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunRecipesApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd_name_for_log(&cmd);
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.dispatch(cmd);

        let code = result.as_ref().map_or_else(|e| e.exit_code(), |c| *c);
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, e.to_string()).kind("error"));
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: RecipesCommand) -> Result<i32, Error> {
        let use_case = &self.app.use_case;
        match cmd {
            RecipesCommand::Help => {
                print_help();
                Ok(0)
            }
            RecipesCommand::List => {
                print!("{}", render_list(&use_case.list()?));
                Ok(0)
            }
            RecipesCommand::Add { recipe, image_path } => {
                let added = use_case.add(recipe, image_path.as_deref())?;
                println!("Added recipe {}: {}", added.id, added.title);
                Ok(0)
            }
            RecipesCommand::Remove { id } => {
                let remaining = use_case.remove(id)?;
                print!("{}", render_list(&remaining));
                Ok(0)
            }
            RecipesCommand::Show { id } => match use_case.show(id)? {
                Some(recipe) => {
                    print!("{}", render_detail(&recipe));
                    Ok(0)
                }
                None => {
                    eprintln!("Recipe not found: {}", id);
                    Ok(1)
                }
            },
            RecipesCommand::Search { query: Some(query) } => {
                if let Some(meals) = use_case.search_once(&query) {
                    print!("{}", render_meals(&meals));
                }
                Ok(0)
            }
            RecipesCommand::Search { query: None } => {
                let (tx, rx) = mpsc::channel();
                spawn_stdin_queries(tx.clone());
                use_case.search_interactive(tx, rx, &TerminalSearchView);
                Ok(0)
            }
            RecipesCommand::Desserts => {
                print!("{}", render_desserts(use_case.desserts().as_deref()));
                Ok(0)
            }
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }
}

fn cmd_name_for_log(cmd: &RecipesCommand) -> &'static str {
    match cmd {
        RecipesCommand::Help => "help",
        RecipesCommand::List => "list",
        RecipesCommand::Add { .. } => "add",
        RecipesCommand::Remove { .. } => "remove",
        RecipesCommand::Show { .. } => "show",
        RecipesCommand::Search { query: Some(_) } => "search",
        RecipesCommand::Search { query: None } => "search_interactive",
        RecipesCommand::Desserts => "desserts",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("recipes: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: recipes [-h] [-v] [--data-dir directory] [<command> [args...]]");
}

fn print_help() {
    println!("Usage: recipes [-h] [-v] [--data-dir directory] [<command> [args...]]");
    println!("  -h, --help            Display this help message.");
    println!("  -v, --verbose         Also write log records to stderr.");
    println!("  --data-dir            Directory holding my-recipes.json (default: data dir below).");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  RECIPES_HOME        Home directory (config, data, state). Default: XDG dirs with a recipes suffix.");
    println!("  RECIPES_MEALDB_URL  TheMealDB base URL (overrides config.json).");
    println!();
    println!("Commands:");
    println!("  list                   List saved recipes (default).");
    println!("  add -t <title> -s <short desc> -i <ingredient>... --step <step>... [--image <file|url>]");
    println!("                         Add a recipe. Every text field is required.");
    println!("  show <id>              Show a saved recipe in detail.");
    println!("  remove <id>            Remove a saved recipe.");
    println!("  search [query...]      Search TheMealDB. Without a query, reads one query per line from stdin.");
    println!("  desserts               List dessert recipes from TheMealDB.");
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::Help(text) => {
            print!("{}", text);
            return Ok(0);
        }
    };
    // help は配線（HOME の解決）に失敗しても出せるようにする
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire_recipes(config.verbose, config.data_dir.as_deref())?;
    let runner = Runner { app };
    runner.run(config)
}

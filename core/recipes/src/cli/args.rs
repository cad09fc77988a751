use crate::domain::{NewRecipe, RecipeId, RecipesCommand};
use clap::builder::ArgAction;
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

/// CLI から受け取った生の設定（ID などは文字列のまま保持）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// --data-dir: レシピの保存先ディレクトリ（未指定なら data_dir）
    pub data_dir: Option<String>,
    /// サブコマンド名（None の場合は list）
    pub command_name: Option<String>,
    /// サブコマンドの位置引数（show/remove の id、search のクエリ語）
    pub command_args: Vec<String>,
    pub title: Option<String>,
    pub short_desc: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub image: Option<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成 / clap が生成したヘルプ
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    /// サブコマンドの --help（clap が整形した文字列をそのまま出す）
    Help(String),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Also write log records to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("data-dir")
                .long("data-dir")
                .value_name("directory")
                .help("Directory holding my-recipes.json")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_add_subcommand() -> clap::Command {
    clap::Command::new("add")
        .about("Add a recipe to the local collection")
        .arg(
            clap::Arg::new("title")
                .short('t')
                .long("title")
                .value_name("text")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("short-desc")
                .short('s')
                .long("short-desc")
                .value_name("text")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("ingredient")
                .short('i')
                .long("ingredient")
                .value_name("line")
                .help("One ingredient line (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            clap::Arg::new("step")
                .long("step")
                .value_name("line")
                .help("One step line (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            clap::Arg::new("image")
                .long("image")
                .value_name("path-or-url")
                .help("Image file (stored as a data URI) or URL")
                .num_args(1),
        )
}

fn build_clap_command() -> clap::Command {
    let id_arg = || clap::Arg::new("id").value_name("id").required(true);

    global_args(
        clap::Command::new("recipes")
            .about("Recipe catalog with a local collection and TheMealDB search")
            .subcommand_required(false)
            .subcommand(clap::Command::new("help").about("Display this help message"))
            .subcommand(clap::Command::new("list").about("List saved recipes (default)"))
            .subcommand(build_add_subcommand())
            .subcommand(
                clap::Command::new("remove")
                    .alias("rm")
                    .about("Remove a saved recipe")
                    .arg(id_arg()),
            )
            .subcommand(
                clap::Command::new("show")
                    .about("Show a saved recipe in detail")
                    .arg(id_arg()),
            )
            .subcommand(
                clap::Command::new("search")
                    .about("Search TheMealDB (reads queries from stdin when no query is given)")
                    .arg(clap::Arg::new("query").num_args(0..).value_name("word")),
            )
            .subcommand(clap::Command::new("desserts").about("List dessert recipes from TheMealDB")),
    )
}

fn strings(m: &clap::ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|i| i.cloned().collect())
        .unwrap_or_default()
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let mut config = Config {
        help: matches.get_flag("help") || matches.subcommand_matches("help").is_some(),
        verbose: matches.get_flag("verbose"),
        data_dir: matches.get_one::<String>("data-dir").cloned(),
        ..Default::default()
    };

    match matches.subcommand() {
        None | Some(("help", _)) => {}
        Some(("add", m)) => {
            config.command_name = Some("add".to_string());
            config.title = m.get_one::<String>("title").cloned();
            config.short_desc = m.get_one::<String>("short-desc").cloned();
            config.ingredients = strings(m, "ingredient");
            config.steps = strings(m, "step");
            config.image = m.get_one::<String>("image").cloned();
        }
        Some((name @ ("remove" | "show"), m)) => {
            config.command_name = Some(name.to_string());
            config.command_args = strings(m, "id");
        }
        Some(("search", m)) => {
            config.command_name = Some("search".to_string());
            config.command_args = strings(m, "query");
        }
        Some((name, _)) => config.command_name = Some(name.to_string()),
    }
    config
}

fn parse_matches(result: Result<clap::ArgMatches, clap::Error>) -> Result<ParseOutcome, Error> {
    let matches = match result {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(ParseOutcome::Help(e.render().to_string()));
        }
        Err(e) => return Err(Error::invalid_argument(e.to_string())),
    };

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_matches(build_clap_command().try_get_matches())
}

/// 引数スライスから解析する（先頭はプログラム名）
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<ParseOutcome, Error> {
    parse_matches(build_clap_command().try_get_matches_from(args))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "recipes", &mut std::io::stdout());
}

/// Config を RecipesCommand に変換する。ID が数値でなければ InvalidArgument。
pub fn config_to_command(config: Config) -> Result<RecipesCommand, Error> {
    if config.help {
        return Ok(RecipesCommand::Help);
    }

    let id = |args: &[String]| -> Result<RecipeId, Error> {
        args.first()
            .ok_or_else(|| Error::invalid_argument("recipe id is required"))?
            .parse()
    };

    match config.command_name.as_deref() {
        None | Some("list") => Ok(RecipesCommand::List),
        Some("add") => Ok(RecipesCommand::Add {
            recipe: NewRecipe {
                title: config.title.unwrap_or_default(),
                short_desc: config.short_desc.unwrap_or_default(),
                ingredients: config.ingredients.join("\n"),
                steps: config.steps.join("\n"),
                image: None,
            },
            image_path: config.image,
        }),
        Some("remove") => Ok(RecipesCommand::Remove {
            id: id(&config.command_args)?,
        }),
        Some("show") => Ok(RecipesCommand::Show {
            id: id(&config.command_args)?,
        }),
        Some("search") => {
            let query = config.command_args.join(" ");
            Ok(RecipesCommand::Search {
                query: (!config.command_args.is_empty()).then_some(query),
            })
        }
        Some("desserts") => Ok(RecipesCommand::Desserts),
        Some(other) => Err(Error::invalid_argument(format!(
            "Command '{}' is not implemented.",
            other
        ))),
    }
}

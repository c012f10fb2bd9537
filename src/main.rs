use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::builder::TypedValueParser;
use worldwise_quiz::config::{DEFAULT_QUESTION_COUNT, Difficulty, SourceConfig};
use worldwise_quiz::data::{DEFAULT_API_URL, OpenTdbConfig};
use worldwise_quiz::{Config, Quiz, Theme};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of questions per quiz
    #[arg(short = 'n', long, env = "QUIZ_AMOUNT", default_value_t = DEFAULT_QUESTION_COUNT,
          value_parser = clap::value_parser!(u16).range(1..=50).map(usize::from))]
    amount: usize,

    /// Trivia API endpoint
    #[arg(long, env = "QUIZ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Provider category id
    #[arg(long, env = "QUIZ_CATEGORY")]
    category: Option<u32>,

    /// Question difficulty
    #[arg(long, env = "QUIZ_DIFFICULTY", value_enum)]
    difficulty: Option<Difficulty>,

    /// HTTP timeout in seconds
    #[arg(long, env = "QUIZ_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// JSON file to load the questions from instead of the API
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Colour theme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,
}

impl Args {
    fn into_config(self) -> Config {
        let source = match self.questions {
            Some(path) => SourceConfig::File(path),
            None => SourceConfig::OpenTdb(OpenTdbConfig {
                api_url: self.api_url,
                category: self.category,
                difficulty: self.difficulty,
                timeout: Duration::from_secs(self.timeout_secs),
            }),
        };

        Config {
            question_count: self.amount,
            source,
            theme: self.theme,
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let config = Args::parse().into_config();
    log::debug!("starting with {:?}", config);

    let quiz = match Quiz::new(&config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser)]
#[command(name = "pokedex-cli")]
#[command(about = "Query a running pokedex server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every loaded type
    Types,
    /// List pokemon by primary type
    List {
        /// Type to include (repeatable)
        #[arg(short = 't', long = "type", required = true)]
        types: Vec<String>,

        /// Field to sort by, highest first (e.g. BaseAttack, Weight)
        #[arg(short, long)]
        sort_by: Option<String>,
    },
    /// Look up a type, pokemon or move by name
    Lookup {
        name: String,
    },
    /// Call the placeholder endpoint
    Placeholder,
}

fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{} cannot be used as a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let url = match &cli.command {
        Commands::Types => endpoint(&base, &["list", "types"])?,
        Commands::List { types, sort_by } => {
            let mut url = endpoint(&base, &["list"])?;
            {
                let mut query = url.query_pairs_mut();
                for t in types {
                    query.append_pair("type", t);
                }
                if let Some(field) = sort_by {
                    query.append_pair("sortby", field);
                }
            }
            url
        }
        Commands::Lookup { name } => endpoint(&base, &[name.as_str()])?,
        Commands::Placeholder => endpoint(&base, &["get"])?,
    };

    let res = client.get(url).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let text = res.text().await?;
    if text.is_empty() {
        eprintln!("(no results)");
    } else {
        println!("{}", text.trim_end());
    }
    Ok(())
}

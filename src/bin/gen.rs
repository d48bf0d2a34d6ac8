//! k2suffix-gen: CLI tool for fetching, checking and querying public suffix lists.

use clap::{Parser, Subcommand};
use k2suffix::host::{extract_host, Host};
use k2suffix::{FindOptions, ParseOptions, SuffixList};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Upstream location of the public suffix list
const DEFAULT_LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

#[derive(Parser)]
#[command(name = "k2suffix-gen")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Fetch, check and query public suffix lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the public suffix list and validate it
    Download {
        /// List URL
        #[arg(short, long, default_value = DEFAULT_LIST_URL)]
        url: String,

        /// Output list file
        #[arg(short, long, default_value = "data/public_suffix_list.dat")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse a list file and report its rule counts
    Check {
        /// Input list file (.dat or .dat.gz)
        #[arg(short, long)]
        input: PathBuf,

        /// Stop at the private section
        #[arg(long)]
        icann_only: bool,
    },

    /// Resolve names against the built-in list or a list file
    Lookup {
        /// Names, hostnames or URLs to resolve
        #[arg(required = true)]
        names: Vec<String>,

        /// List file to use instead of the built-in list
        #[arg(short, long)]
        list: Option<PathBuf>,

        /// Ignore rules from the private section
        #[arg(long)]
        ignore_private: bool,

        /// Print results as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Download {
            url,
            output,
            verbose,
        } => download(&url, &output, verbose),
        Commands::Check { input, icann_only } => check(&input, icann_only),
        Commands::Lookup {
            names,
            list,
            ignore_private,
            json,
        } => lookup(&names, list.as_deref(), ignore_private, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn download(url: &str, output: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        println!("Downloading {}", url);
    }

    let response = ureq::get(url)
        .timeout(Duration::from_secs(60))
        .call()
        .map_err(|e| format!("Download failed: {}", e))?;

    let mut data = Vec::new();
    response.into_reader().read_to_end(&mut data)?;

    // Refuse to replace a good list with a broken one
    let list = SuffixList::from_bytes(&data, &ParseOptions::default())?;
    if list.is_empty() {
        return Err("downloaded list contains no rules".into());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Write to temp file, then atomic rename
    let temp_path = output.with_extension("tmp");
    let mut temp_file = fs::File::create(&temp_path)?;
    temp_file.write_all(&data)?;
    temp_file.sync_all()?;
    drop(temp_file);
    fs::rename(&temp_path, output)?;

    log::info!(
        "Saved {:?}: {} bytes, {} ICANN rules, {} private rules",
        output,
        data.len(),
        list.icann_count(),
        list.private_count()
    );
    Ok(())
}

fn check(input: &Path, icann_only: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = if icann_only {
        ParseOptions::icann_only()
    } else {
        ParseOptions::default()
    };
    let list = SuffixList::from_file(input, &options)?;

    println!("{:?}: {} rules", input, list.size());
    println!("  ICANN:   {}", list.icann_count());
    println!("  Private: {}", list.private_count());
    Ok(())
}

fn lookup(
    names: &[String],
    list_path: Option<&Path>,
    ignore_private: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let list = match list_path {
        Some(path) => Arc::new(SuffixList::from_file(path, &ParseOptions::default())?),
        None => k2suffix::default_list(),
    };
    let options = FindOptions::new(ignore_private);

    for input in names {
        let resolved = extract_host(input).and_then(|host| match host {
            Host::Ip(ip) => Ok((ip.to_string(), None)),
            Host::Domain(domain) => list
                .parse_with_options(&domain, &options)
                .map(|name| (domain, Some(name))),
        });

        match resolved {
            Ok((host, Some(name))) if json => println!(
                "{}",
                serde_json::json!({
                    "input": input,
                    "host": host,
                    "domain": name.registrable(),
                    "tld": name.tld(),
                    "sld": name.sld(),
                    "trd": name.trd(),
                    "rule": name.rule().to_string(),
                    "icann": name.is_icann(),
                })
            ),
            Ok((host, Some(name))) => println!(
                "{}\t{}\ttld={} rule={} icann={}",
                host,
                name.registrable(),
                name.tld(),
                name.rule(),
                name.is_icann()
            ),
            Ok((host, None)) if json => println!(
                "{}",
                serde_json::json!({ "input": input, "host": host, "ip": true })
            ),
            Ok((host, None)) => println!("{}\t{}\t(ip)", host, host),
            Err(e) if json => println!(
                "{}",
                serde_json::json!({ "input": input, "error": e.to_string() })
            ),
            Err(e) => println!("{}\terror: {}", input, e),
        }
    }

    Ok(())
}

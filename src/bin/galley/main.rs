use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use spdlog::warn;

use galley::collection::{Order, PostCollection};
use galley::config::Config;
use galley::loader::load_dir;
use galley::logger::configure_logger;
use galley::paginator::Paginator;
use galley::post::BlogPost;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "galley.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every post file and report integrity problems
    Check,
    /// Print the ordered post listing
    Index {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
        /// Include drafts and scheduled posts
        #[arg(long)]
        include_drafts: bool,
        /// Show one page of the listing instead of all of it
        #[arg(long)]
        page: Option<u32>,
    },
}

#[derive(Serialize)]
struct IndexEntry<'a> {
    id: u32,
    title: &'a str,
    author: &'a str,
    published_at: i64,
    draft: bool,
}

fn run_check(config: &Config) -> Result<()> {
    let collection = load_dir(&config.paths.posts_dir)?;

    let now = Utc::now();
    let all = collection.ordered_by_date(Order::OldestFirst);
    let drafts = all.iter().filter(|post| post.draft).count();
    let scheduled = all.iter().filter(|post| post.is_scheduled(now)).count();

    println!("Posts:     {}", collection.len());
    println!("Drafts:    {}", drafts);
    println!("Scheduled: {}", scheduled);
    Ok(())
}

fn run_index(config: &Config, json: bool, include_drafts: bool, page: Option<u32>) -> Result<()> {
    let collection = load_dir(&config.paths.posts_dir)?;

    let posts = listing(&collection, include_drafts || config.defaults.include_drafts);
    let posts: &[&BlogPost] = match page {
        Some(number) => {
            let paginator = Paginator::new(&posts, config.defaults.page_size);
            paginator.page(number)?
        }
        None => &posts,
    };

    if json {
        let entries: Vec<IndexEntry> = posts.iter().map(|post| IndexEntry {
            id: post.id.0,
            title: &post.title,
            author: post.author.as_str(),
            published_at: post.published_at.timestamp(),
            draft: post.draft,
        }).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for post in posts {
            println!("{:>5}  {}  {:<8}  {}{}",
                     post.id,
                     post.published_at.format("%Y-%m-%d"),
                     post.author,
                     post.title,
                     if post.draft { "  [draft]" } else { "" },
            );
        }
    }
    Ok(())
}

fn listing(collection: &PostCollection, include_drafts: bool) -> Vec<&BlogPost> {
    if include_drafts {
        collection.ordered_by_date(Order::NewestFirst)
    } else {
        collection.published_as_of(Utc::now(), Order::NewestFirst)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run galley --help");
            return Ok(());
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command {
        Command::Check => run_check(&config),
        Command::Index { json, include_drafts, page } => {
            run_index(&config, json, include_drafts, page)
        }
    }
}

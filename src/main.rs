use clap::{Parser, Subcommand};

use rmtdev::commands;
use rmtdev::config::AppConfig;
use rmtdev::domain::models::{JobId, JobItemContent, JobPage, SortBy};
use rmtdev::error::Result;
use rmtdev::lifecycle;

#[derive(Parser)]
#[command(name = "rmtdev", version, about = "Search and bookmark remote developer jobs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search job postings
    Search {
        text: String,
        /// Sort order: "relevant" or "recent"
        #[arg(long, default_value = "relevant")]
        sort: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show full detail for one posting ("42", "#42", or a URL with a fragment)
    Show { target: String },
    /// Toggle a bookmark
    Bookmark { id: u32 },
    /// List bookmarked postings
    Bookmarks {
        /// Print only the stored ids, skipping the detail fetches
        #[arg(long)]
        ids_only: bool,
    },
}

#[tokio::main]
async fn main() {
    lifecycle::init_logging();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let app = lifecycle::bootstrap(AppConfig::from_env()).await?;

    match cli.command {
        Command::Search { text, sort, page } => {
            let sort_by: SortBy = sort.parse()?;
            let results = commands::search_jobs(&app, &text, sort_by, page).await?;
            print_page(&results, sort_by);
        }
        Command::Show { target } => {
            let content = commands::show_job(&app, &target).await?;
            print_content(&content);
        }
        Command::Bookmark { id } => {
            let bookmarked = commands::toggle_bookmark(&app, JobId(id)).await?;
            if bookmarked {
                println!("Bookmarked job {id}");
            } else {
                println!("Removed bookmark for job {id}");
            }
        }
        Command::Bookmarks { ids_only } => {
            if ids_only {
                for id in commands::bookmarked_ids(&app).await {
                    println!("{id}");
                }
            } else {
                let jobs = commands::bookmarked_jobs(&app).await;
                if jobs.is_empty() {
                    println!("No bookmarks yet");
                }
                for content in jobs {
                    print_item_line(&content);
                }
            }
        }
    }

    Ok(())
}

fn print_page(page: &JobPage, sort_by: SortBy) {
    if page.total_items == 0 {
        println!("No matching jobs");
        return;
    }

    println!(
        "{} jobs, sorted by {} (page {}/{})",
        page.total_items,
        sort_by.as_str(),
        page.page,
        page.total_pages
    );
    for item in &page.items {
        println!(
            "  #{:<6} [{}] {} - {} ({}d ago, score {})",
            item.id.0, item.badge_letters, item.title, item.company, item.days_ago,
            item.relevance_score
        );
    }
}

fn print_item_line(content: &JobItemContent) {
    let item = &content.item;
    println!(
        "  #{:<6} {} - {} | {} | {}",
        item.id.0, item.title, item.company, content.location, content.salary
    );
}

fn print_content(content: &JobItemContent) {
    let item = &content.item;
    println!("{} - {}", item.title, item.company);
    println!("  id:           {}", item.id);
    println!("  posted:       {}d ago ({})", item.days_ago, item.date.date_naive());
    println!("  type:         {}", content.job_type);
    println!("  duration:     {}", content.duration);
    println!("  location:     {}", content.location);
    println!("  salary:       {}", content.salary);
    println!("  requirements: {}", content.requirements);
    println!("  qualifications: {}", content.qualifications.join(", "));
    println!("  apply:        {}", content.apply_link);
    println!();
    println!("{}", content.description);
}

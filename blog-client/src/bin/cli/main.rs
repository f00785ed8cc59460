use std::path::PathBuf;

use anyhow::Result;
use blog_client::ApiClient;
use blog_client::App;
use blog_client::SessionStore;
use clap::Parser;
use clap::Subcommand;

/// blog-cli - command line client for the blog-list service
#[derive(Parser)]
#[command(name = "blog-cli")]
#[command(about = "Browse and manage shared blog bookmarks", long_about = None)]
struct Cli {
    /// Base URL of the blog service
    #[arg(long, default_value = "http://localhost:3003")]
    server: String,

    /// Path to the persisted session file
    #[arg(long)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Register {
        username: String,
        password: String,

        /// Display name shown on owned blogs
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign in and persist the session
    Login { username: String, password: String },
    /// Sign out and discard the persisted session
    Logout,
    /// List all blogs
    List,
    /// Add a blog
    Create {
        title: String,
        url: String,

        #[arg(long)]
        author: Option<String>,
    },
    /// Like a blog by id
    Like { id: String },
    /// Delete one of your blogs by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match cli.session_file {
        Some(path) => SessionStore::new(path),
        None => SessionStore::new(SessionStore::default_path()),
    };
    let api = ApiClient::new(cli.server);
    let mut app = App::new(api, store)?;

    match cli.command {
        Commands::Register {
            username,
            password,
            name,
        } => {
            let user = app.register(&username, name.as_deref(), &password).await?;
            println!("registered {}", user.username);
        }
        Commands::Login { username, password } => {
            app.login(&username, &password).await?;
            if let Some(session) = app.session() {
                let who = session.name.as_deref().unwrap_or(&session.username);
                println!("{} logged-in", who);
            }
        }
        Commands::Logout => {
            app.logout()?;
            println!("logged out");
        }
        Commands::List => {
            for blog in app.refresh().await? {
                let author = blog.author.as_deref().unwrap_or("unknown author");
                println!("{}  {} by {} ({} likes)", blog.id, blog.title, author, blog.likes);
                println!("    {}", blog.url);
            }
        }
        Commands::Create { title, url, author } => {
            let blog = app.create_blog(&title, author.as_deref(), &url).await?;
            let author = blog.author.as_deref().unwrap_or("unknown author");
            println!("a new blog was created: \"{}\" by {}", blog.title, author);
        }
        Commands::Like { id } => {
            let blog = app.like_blog(&id).await?;
            println!("\"{}\" now has {} likes", blog.title, blog.likes);
        }
        Commands::Delete { id } => {
            app.delete_blog(&id).await?;
            println!("blog deleted");
        }
    }

    Ok(())
}

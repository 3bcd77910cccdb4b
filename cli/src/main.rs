//! Lodestar interactive shell
//!
//! Line-oriented menu around a single browsing session. All prompting,
//! parsing, and formatting happens here; the session never touches the
//! console and only reports status values back.

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};

use lodestar_core::{init_logging, Boundary, Config, Move, Session};

fn main() -> io::Result<()> {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(homepage) => Config::new(&homepage),
        None => Config::default(),
    };

    let mut session = Session::with_bookmark_capacity(&config.homepage, config.bookmark_capacity);
    println!("Lodestar session started at {}", session.current_url());

    loop {
        let Some(choice) = prompt(
            "Choose operation: (1) Visit url, (2) Back, (3) Forward, \
             (4) Show bookmarks, (5) Show history, (0) Exit: ",
        )?
        else {
            break;
        };

        match choice.as_str() {
            "0" => break,
            "1" => visit(&mut session)?,
            "2" => step_back(&mut session)?,
            "3" => step_forward(&mut session)?,
            "4" => show_bookmarks(&mut session)?,
            "5" => show_history(&mut session)?,
            _ => println!("Invalid choice. Please choose again."),
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line. `None` means stdin closed.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn confirm(message: &str) -> io::Result<bool> {
    Ok(matches!(
        prompt(message)?.as_deref(),
        Some("y") | Some("Y")
    ))
}

fn visit(session: &mut Session) -> io::Result<()> {
    let Some(url) = prompt("Enter URL to visit: ")? else {
        return Ok(());
    };
    if url.is_empty() {
        println!("No URL entered.");
        return Ok(());
    }

    session.visit_page(&url);
    println!("Visited: {url}");

    if confirm("Do you want to bookmark this page? (y/n): ")? {
        match session.add_bookmark(&url) {
            Ok(()) => println!("Page bookmarked!"),
            Err(err) => println!("Could not bookmark this page: {err}"),
        }
    }

    Ok(())
}

fn read_steps(message: &str) -> io::Result<Option<i32>> {
    let Some(line) = prompt(message)? else {
        return Ok(None);
    };

    match line.parse() {
        Ok(steps) => Ok(Some(steps)),
        Err(_) => {
            println!("Not a number: {line}");
            Ok(None)
        }
    }
}

fn step_back(session: &mut Session) -> io::Result<()> {
    if let Some(steps) = read_steps("Enter number of steps to go back: ")? {
        let outcome = session.back(steps);
        report_boundary(&outcome);
        println!("Current URL after going back: {}", outcome.url);
    }
    Ok(())
}

fn step_forward(session: &mut Session) -> io::Result<()> {
    if let Some(steps) = read_steps("Enter number of steps to go forward: ")? {
        let outcome = session.forward(steps);
        report_boundary(&outcome);
        println!("Current URL after going forward: {}", outcome.url);
    }
    Ok(())
}

fn report_boundary(outcome: &Move) {
    match outcome.boundary {
        Some(Boundary::Homepage) => println!("This is the homepage"),
        Some(Boundary::LastPage) => println!("This is the last page you visited"),
        None => {}
    }
}

fn show_bookmarks(session: &mut Session) -> io::Result<()> {
    let bookmarks = session.bookmarks_snapshot();
    if bookmarks.is_empty() {
        println!("There are no bookmarks");
        return Ok(());
    }

    println!("Bookmarked URLs:");
    for url in &bookmarks {
        println!("{url}");
    }
    println!("------------------------------");

    if confirm("Do you want to remove any bookmark? (y/n): ")? {
        let Some(url) = prompt("Enter the URL to remove from bookmarks: ")? else {
            return Ok(());
        };
        if session.is_bookmarked(&url) {
            session.remove_bookmark(&url);
            println!("Bookmark removed!");
        } else {
            println!("Bookmark not found!");
        }
    }

    Ok(())
}

fn show_history(session: &mut Session) -> io::Result<()> {
    let entries = session.history_snapshot();
    if entries.is_empty() {
        println!("No history available.");
        return Ok(());
    }

    println!("Visited URLs:");
    for entry in &entries {
        println!("{}   {}", entry.url, format_timestamp(entry.visited_at));
    }
    println!("----------------------------------------");

    if confirm("Do you want to delete a specific URL from history? (y/n): ")? {
        if let Some(url) = prompt("Enter the URL to delete from history: ")? {
            if session.delete_history_entry(&url) {
                println!("URL deleted!");
            } else {
                println!("URL not found in history!");
            }
        }
    }

    if confirm("Do you want to delete all history? (y/n): ")? {
        session.delete_all_history();
        println!("All history deleted!");
    }

    Ok(())
}

/// Render a stored UTC timestamp in the local timezone for display.
fn format_timestamp(visited_at: DateTime<Utc>) -> String {
    visited_at
        .with_timezone(&Local)
        .format("%a %b %e %H:%M:%S %Y")
        .to_string()
}

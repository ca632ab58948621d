//! Line-oriented interactive session over a [`FeedController`].

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::Result;
use crate::cli::commands::{print_article_detail, print_articles, report_outcome};
use crate::feed::FeedController;

const HELP: &str = "\
Commands:
  more | n           load the next page
  refresh | r        reload from the first page
  search <words>     search news (replaces the list)
  clear              leave search, back to latest news
  open <n>           show article n
  bookmark <n> | b   toggle bookmark on article n
  saved              list bookmarks
  unsave <n>         remove bookmark n
  list | l           show the current list
  help | ?           this text
  quit | q           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    More,
    Refresh,
    Search(String),
    ClearSearch,
    Open(usize),
    ToggleBookmark(usize),
    ListBookmarks,
    RemoveBookmark(usize),
    List,
    Help,
    Quit,
    None,
    Invalid(String),
}

impl From<&str> for Action {
    fn from(line: &str) -> Self {
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        let index = |arg: &str| -> std::result::Result<usize, String> {
            match arg.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n - 1),
                _ => Err(format!("'{}' needs an article number", cmd)),
            }
        };

        match cmd {
            "" => Action::None,
            "more" | "next" | "n" => Action::More,
            "refresh" | "r" => Action::Refresh,
            "search" | "s" if arg.is_empty() => Action::Invalid("search needs keywords".into()),
            "search" | "s" => Action::Search(arg.to_string()),
            "clear" => Action::ClearSearch,
            "open" | "o" => index(arg).map_or_else(Action::Invalid, Action::Open),
            "bookmark" | "b" => index(arg).map_or_else(Action::Invalid, Action::ToggleBookmark),
            "saved" => Action::ListBookmarks,
            "unsave" => index(arg).map_or_else(Action::Invalid, Action::RemoveBookmark),
            "list" | "l" => Action::List,
            "help" | "?" => Action::Help,
            "quit" | "q" | "exit" => Action::Quit,
            other => Action::Invalid(format!("Unknown command '{}' (try 'help')", other)),
        }
    }
}

/// Run the session until `quit` or end of input.
///
/// The first page is fetched before the first prompt.
pub async fn run<R, W>(controller: &FeedController, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let outcome = controller.fetch_next_page().await;
    report_outcome(out, outcome)?;
    print_articles(out, controller, &controller.articles())?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Action::from(line.as_str()) {
            Action::Quit => break,
            Action::None => {}
            Action::Help => writeln!(out, "{}", HELP)?,
            Action::Invalid(msg) => writeln!(out, "{}", msg)?,
            Action::More => {
                let last = controller.articles().len().saturating_sub(1);
                let outcome = controller.on_item_visible(last).await;
                report_outcome(out, outcome)?;
            }
            Action::Refresh => {
                let outcome = controller.refresh().await;
                report_outcome(out, outcome)?;
                print_articles(out, controller, &controller.articles())?;
            }
            Action::Search(query) => {
                controller.set_query(query);
                let outcome = controller.refresh().await;
                report_outcome(out, outcome)?;
                print_articles(out, controller, &controller.articles())?;
            }
            Action::ClearSearch => {
                controller.set_query("");
                let outcome = controller.refresh().await;
                report_outcome(out, outcome)?;
                print_articles(out, controller, &controller.articles())?;
            }
            Action::List => print_articles(out, controller, &controller.articles())?,
            Action::Open(i) => match controller.articles().get(i) {
                Some(article) => {
                    print_article_detail(out, article, controller.is_bookmarked(&article.id))?
                }
                None => writeln!(out, "No article {}", i + 1)?,
            },
            Action::ToggleBookmark(i) => match controller.articles().get(i) {
                Some(article) => {
                    let saved = controller.toggle_bookmark(article);
                    let verb = if saved { "Bookmarked" } else { "Removed bookmark" };
                    writeln!(out, "{}: {}", verb, article.title)?;
                }
                None => writeln!(out, "No article {}", i + 1)?,
            },
            Action::ListBookmarks => {
                let bookmarks = controller.bookmarks();
                if bookmarks.is_empty() {
                    writeln!(out, "No Bookmarks yet")?;
                } else {
                    print_articles(out, controller, &bookmarks)?;
                }
            }
            Action::RemoveBookmark(i) => match controller.bookmarks().get(i) {
                Some(article) => {
                    controller.toggle_bookmark(article);
                    writeln!(out, "Removed bookmark: {}", article.title)?;
                }
                None => writeln!(out, "No bookmark {}", i + 1)?,
            },
        }
    }

    controller.close();
    Ok(())
}

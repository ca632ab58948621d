use std::io::{self, Write};

use crate::app::{AppContext, Result};
use crate::domain::Article;
use crate::feed::{FeedController, FetchOutcome};

pub async fn browse(ctx: &AppContext, pages: u32) -> Result<()> {
    let controller = &ctx.controller;
    let mut stdout = io::stdout();

    for _ in 0..pages {
        let outcome = controller.fetch_next_page().await;
        report_outcome(&mut stdout, outcome)?;
        if outcome == FetchOutcome::Failed || controller.cursor().is_none() {
            break;
        }
    }

    print_articles(&mut stdout, controller, &controller.articles())?;
    Ok(())
}

pub async fn search(ctx: &AppContext, query: &str) -> Result<()> {
    let controller = &ctx.controller;
    let mut stdout = io::stdout();

    controller.set_query(query);
    let outcome = controller.refresh().await;
    report_outcome(&mut stdout, outcome)?;

    let articles = controller.articles();
    if articles.is_empty() && outcome != FetchOutcome::Failed {
        writeln!(stdout, "No results for \"{}\"", query)?;
        return Ok(());
    }
    print_articles(&mut stdout, controller, &articles)?;
    Ok(())
}

/// One line per article: index, bookmark marker, featured marker, title, source.
pub fn print_articles(out: &mut dyn Write, controller: &FeedController, articles: &[Article]) -> Result<()> {
    for (i, article) in articles.iter().enumerate() {
        let saved = if controller.is_bookmarked(&article.id) { "*" } else { " " };
        let featured = if article.is_featured { " [FEATURED]" } else { "" };
        writeln!(
            out,
            "{:>3}. [{}] {}{} ({})",
            i + 1,
            saved,
            article.title,
            featured,
            article.source_name
        )?;
    }
    Ok(())
}

pub fn print_article_detail(out: &mut dyn Write, article: &Article, bookmarked: bool) -> Result<()> {
    writeln!(out, "{}", article.title)?;
    writeln!(out, "Source: {}", article.source_name)?;
    writeln!(out, "Published: {}", article.display_published_at())?;
    match &article.media_url {
        Some(url) => writeln!(out, "Image: {}", url)?,
        None => writeln!(out, "Image: none")?,
    }
    writeln!(out, "Bookmarked: {}", if bookmarked { "yes" } else { "no" })?;
    if !article.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", article.description)?;
    }
    Ok(())
}

pub fn report_outcome(out: &mut dyn Write, outcome: FetchOutcome) -> Result<()> {
    match outcome {
        FetchOutcome::Appended(0) | FetchOutcome::Replaced(0) => writeln!(out, "No articles")?,
        FetchOutcome::Appended(n) => writeln!(out, "Loaded {} more articles", n)?,
        FetchOutcome::Replaced(n) => writeln!(out, "Found {} articles", n)?,
        FetchOutcome::Failed => writeln!(out, "Could not load news (see log for details)")?,
        FetchOutcome::Skipped => writeln!(out, "Already loading")?,
        FetchOutcome::Discarded => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, featured: bool) -> Article {
        Article {
            id: id.into(),
            title: format!("Title {}", id),
            source_name: "Wire".into(),
            published_at: "2025-03-20T14:30:00".into(),
            media_url: featured.then(|| "https://img.example.com/x.jpg".to_string()),
            description: "Body text".into(),
            is_featured: featured,
        }
    }

    #[test]
    fn test_print_articles_marks_bookmarks_and_featured() {
        let ctx = AppContext::offline();
        let a = article("a", true);
        let b = article("b", false);
        ctx.controller.toggle_bookmark(&b);

        let mut out = Vec::new();
        print_articles(&mut out, &ctx.controller, &[a, b]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "  1. [ ] Title a [FEATURED] (Wire)\n  2. [*] Title b (Wire)\n"
        );
    }

    #[test]
    fn test_detail_formats_date() {
        let mut out = Vec::new();
        print_article_detail(&mut out, &article("a", false), true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Published: March 20, 2025 at 02:30 PM"));
        assert!(text.contains("Image: none"));
        assert!(text.contains("Bookmarked: yes"));
        assert!(text.ends_with("Body text\n"));
    }

    #[test]
    fn test_report_outcome_messages() {
        let mut out = Vec::new();
        report_outcome(&mut out, FetchOutcome::Appended(3)).unwrap();
        report_outcome(&mut out, FetchOutcome::Replaced(0)).unwrap();
        report_outcome(&mut out, FetchOutcome::Discarded).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Loaded 3 more articles\nNo articles\n"
        );
    }
}

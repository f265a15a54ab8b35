//! Text screens. Pure functions so they can be checked without a terminal.

use ghx_core::repository::RepositoryRecord;
use ghx_core::route::Route;

pub const TITLE: &str = "Explore repositories on GitHub";

/// Dashboard: title, the single error line if any, then one entry per record.
pub fn render_dashboard(repositories: &[RepositoryRecord], error: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n");

    if let Some(message) = error {
        out.push_str(&format!("! {message}\n\n"));
    }

    if repositories.is_empty() {
        out.push_str("No repositories yet. Look one up with `ghx add owner/name`.\n");
        return out;
    }

    for repo in repositories {
        out.push_str(&format!(
            "  {}  >  {}\n",
            repo.full_name,
            Route::repository(repo.full_name.clone())
        ));
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!("    {description}\n"));
        }
        out.push_str(&format!(
            "    by {} <{}>\n",
            repo.owner.login, repo.owner.avatar_url
        ));
    }
    out
}

/// Detail screen for one record, with the route back to the dashboard.
pub fn render_repository(repo: &RepositoryRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("<  back  {}\n\n", Route::Dashboard));
    out.push_str(&format!("{}\n", repo.full_name));
    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("{description}\n"));
    }
    out.push('\n');
    out.push_str(&format!(
        "owner   {} <{}>\n",
        repo.owner.login, repo.owner.avatar_url
    ));
    if let Some(url) = &repo.html_url {
        out.push_str(&format!("web     {url}\n"));
    }

    let counts = [
        ("stars", repo.stargazers_count),
        ("forks", repo.forks_count),
        ("open issues", repo.open_issues_count),
    ];
    if counts.iter().any(|(_, n)| n.is_some()) {
        let line: Vec<String> = counts
            .iter()
            .map(|(label, n)| match n {
                Some(n) => format!("{label} {n}"),
                None => format!("{label} -"),
            })
            .collect();
        out.push_str(&format!("{}\n", line.join("  ")));
    }
    out
}

//! Server-side rendered HTML pages

use chrono::{Datelike, NaiveDate};

use crate::data_fetcher::models::GameStatRecord;
use crate::season::Season;

const STYLE: &str = "body{font-family:sans-serif;max-width:42rem;margin:2rem auto;\
                     padding:0 1rem;color:#1d1d1f}\
                     nav a{margin-right:1rem}table{border-collapse:collapse}\
                     td,th{padding:.25rem .75rem;text-align:left}\
                     tr:nth-child(even){background:#f2f2f2}.muted{color:#6e6e73}";

/// Escapes text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a><a href=\"/lebron\">LeBron</a>\
         <a href=\"/lakers\">Lakers</a><a href=\"/stats\">Stats</a>\
         <a href=\"/trivia\">Trivia</a><a href=\"/about\">About</a></nav>\n\
         {body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

pub fn home_page() -> String {
    layout(
        "Courtside Stats",
        "<h1>Courtside Stats</h1>\
         <p>Box scores and averages for LeBron James, one game at a time.</p>\
         <p>Pick a date to see his line, e.g. \
         <a href=\"/stats/2016-06-19\">/stats/2016-06-19</a>.</p>",
    )
}

pub fn about_page() -> String {
    layout(
        "About",
        "<h1>About</h1>\
         <p>This site looks up LeBron James' statistics from a public sports-statistics \
         provider. Game pages show the counted stats for one game; season and career \
         views show per-game averages.</p>",
    )
}

pub fn lebron_page() -> String {
    layout(
        "LeBron James",
        "<h1>LeBron James</h1>\
         <p>Forward out of St. Vincent-St. Mary High School in Akron, Ohio, drafted first \
         overall in 2003 by the Cleveland Cavaliers.</p>\
         <p>Teams: Cleveland Cavaliers, Miami Heat, Los Angeles Lakers.</p>\
         <p>Career averages are served as JSON at <a href=\"/api/career\">/api/career</a>.</p>",
    )
}

pub fn lakers_page() -> String {
    layout(
        "Los Angeles Lakers",
        "<h1>Los Angeles Lakers</h1>\
         <p>LeBron's current team. The Lakers play in the Pacific Division of the Western \
         Conference alongside the Golden State Warriors, LA Clippers, Phoenix Suns and \
         Sacramento Kings.</p>",
    )
}

pub fn trivia_page() -> String {
    layout(
        "Trivia",
        "<h1>Trivia</h1>\
         <ol>\
         <li>Which team drafted LeBron in 2003?</li>\
         <li>How many championships did he win with the Miami Heat?</li>\
         <li>In which season did he pass Kareem Abdul-Jabbar on the all-time scoring list?</li>\
         </ol>",
    )
}

pub fn stats_index_page() -> String {
    layout(
        "Stats",
        "<h1>Stats</h1>\
         <p>Append a date to the address to look up that day's game, for example \
         <a href=\"/stats/2007-01-24\">/stats/2007-01-24</a>.</p>\
         <p>JSON: <code>/api/stats/YYYY-MM-DD</code>, <code>/api/seasons/YYYY</code>, \
         <code>/api/career</code>.</p>",
    )
}

/// Game page for `date`. `record` is `None` when no game was played that day.
pub fn game_stats_page(date: NaiveDate, season: Season, record: Option<&GameStatRecord>) -> String {
    let mut body = format!(
        "<h1>{month:02}/{day:02}/{year}</h1>\n<p class=\"muted\">Season {season}</p>\n",
        month = date.month(),
        day = date.day(),
        year = date.year(),
    );

    match record {
        Some(record) => {
            body.push_str("<table>\n");
            for (label, value) in record.rows() {
                body.push_str(&format!(
                    "<tr><th>{}</th><td>{}</td></tr>\n",
                    escape_html(label),
                    escape_html(&value)
                ));
            }
            body.push_str("</table>");
        }
        None => body.push_str("<p>No game that day.</p>"),
    }

    layout(&format!("Stats for {date}"), &body)
}

pub fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            "<h1>{}</h1>\n<p>{}</p>",
            escape_html(title),
            escape_html(message)
        ),
    )
}

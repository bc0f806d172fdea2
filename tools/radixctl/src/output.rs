//! Terminal output for replies

use anyhow::Result;
use colored::*;
use serde_json::Value;

use crate::client::Reply;

fn field<'a>(body: &'a Value, key: &str) -> &'a str {
    body[key].as_str().unwrap_or("")
}

/// Summary lines for a reply; for errors the first line is the message
pub fn summarize(reply: &Reply) -> Vec<String> {
    let body = &reply.body;
    if !reply.is_success() {
        let mut lines = vec![format!("{} ({})", field(body, "error"), reply.status)];
        if let Some(detail) = body["detail"].as_str() {
            lines.push(detail.to_string());
        }
        return lines;
    }

    match field(body, "kind") {
        "result" => vec![
            field(body, "description").to_string(),
            format!(
                "result:    {} ({})",
                field(body, "result"),
                field(body, "result_decimal")
            ),
        ],
        "division" => vec![
            field(body, "description").to_string(),
            format!(
                "quotient:  {} ({})",
                field(body, "quotient"),
                field(body, "quotient_decimal")
            ),
            format!(
                "remainder: {} ({})",
                field(body, "remainder"),
                field(body, "remainder_decimal")
            ),
        ],
        "conversion" => vec![format!(
            "{} (base {}) = {} (base {})",
            field(body, "number"),
            body["from_base"],
            field(body, "result"),
            body["to_base"]
        )],
        _ => match body["level"].as_str() {
            Some(level) => vec![format!("log level: {}", level)],
            None => vec![body.to_string()],
        },
    }
}

pub fn print_reply(reply: &Reply, as_json: bool) -> Result<()> {
    if as_json {
        let text = serde_json::to_string_pretty(&reply.body)?;
        if reply.is_success() {
            println!("{}", text);
        } else {
            eprintln!("{}", text.red());
        }
        return Ok(());
    }

    let lines = summarize(reply);
    if reply.is_success() {
        for line in lines {
            println!("{}", line);
        }
    } else {
        let mut lines = lines.into_iter();
        if let Some(message) = lines.next() {
            eprintln!("{} {}", "ERROR".red().bold(), message.red());
        }
        for line in lines {
            eprintln!("      {}", line);
        }
    }
    Ok(())
}

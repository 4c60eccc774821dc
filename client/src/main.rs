//! Interactive terminal client for the four daily-boost services.
//!
//! Presents a numbered menu and issues one blocking request per selection.
//! Each service must be started separately; a service that is down produces
//! a printed hint and the menu keeps running.

use std::{
    env,
    io::{self, Write},
};

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

struct Services {
    quotes: String,
    funfacts: String,
    reflections: String,
    goals: String,
}

impl Services {
    fn from_env() -> Self {
        Self {
            quotes: base_url("QUOTES_URL", 5001),
            funfacts: base_url("FUNFACTS_URL", 5002),
            reflections: base_url("REFLECTIONS_URL", 5003),
            goals: base_url("GOALS_URL", 5004),
        }
    }
}

fn base_url(key: &str, default_port: u16) -> String {
    env::var(key).unwrap_or_else(|_| format!("http://localhost:{default_port}"))
}

#[tokio::main]
async fn main() {
    let services = Services::from_env();
    let client = Client::new();

    println!("\nWelcome to the daily-boost client!");
    println!("\nNote: Make sure all services are running:");
    println!("   - Quotes:      {}", services.quotes);
    println!("   - Fun Facts:   {}", services.funfacts);
    println!("   - Reflections: {}", services.reflections);
    println!("   - Goals:       {}", services.goals);

    loop {
        print_menu();
        let choice = prompt("Select an option (1-9): ");

        match choice.as_str() {
            "1" => report(get_quote(&client, &services.quotes).await, "Quotes", &services.quotes),
            "2" => report(
                get_funfact(&client, &services.funfacts).await,
                "Fun Facts",
                &services.funfacts,
            ),
            "3" => report(
                add_funfact(&client, &services.funfacts).await,
                "Fun Facts",
                &services.funfacts,
            ),
            "4" => report(
                add_reflection(&client, &services.reflections).await,
                "Reflections",
                &services.reflections,
            ),
            "5" => report(
                view_today_reflection(&client, &services.reflections).await,
                "Reflections",
                &services.reflections,
            ),
            "6" => report(view_goals(&client, &services.goals).await, "Goals", &services.goals),
            "7" => report(add_goal(&client, &services.goals).await, "Goals", &services.goals),
            "8" => report(
                complete_goal(&client, &services.goals).await,
                "Goals",
                &services.goals,
            ),
            "9" => {
                println!("\nGoodbye! Thanks for using the daily-boost services.");
                break;
            }
            _ => println!("\nInvalid option. Please select 1-9."),
        }

        prompt("\nPress Enter to continue...");
    }
}

fn print_menu() {
    print_separator();
    println!("Daily Boost Menu");
    print_separator();
    println!("1. Get Inspirational Quote");
    println!("2. Get Fun Fact");
    println!("3. Add Fun Fact");
    println!("4. Add Daily Reflection");
    println!("5. View Today's Reflection");
    println!("6. View All Goals");
    println!("7. Add New Goal");
    println!("8. Mark Goal as Completed");
    println!("9. Exit");
    print_separator();
}

fn print_separator() {
    println!("\n{}\n", "=".repeat(60));
}

fn prompt(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

/// Prints a connection hint or the error itself; successful calls print
/// their own output.
fn report(result: Result<()>, service: &str, base: &str) {
    if let Err(err) = result {
        let refused = err
            .downcast_ref::<reqwest::Error>()
            .is_some_and(|e| e.is_connect() || e.is_timeout());

        if refused {
            println!("Error: Could not connect to the {service} service.");
            println!("   Make sure it's running at {base}.");
        } else {
            println!("Error: {err}");
        }
    }
}

async fn get_quote(client: &Client, base: &str) -> Result<()> {
    let response = client.get(format!("{base}/api/quote")).send().await?;

    if response.status() == StatusCode::OK {
        let quote: Value = response.json().await?;
        println!("\nInspirational Quote:");
        println!("   \"{}\"", text(&quote, "quote"));
        println!("   (ID: {})", text_or_number(&quote, "id"));
    } else {
        print_failure(response).await?;
    }

    Ok(())
}

async fn get_funfact(client: &Client, base: &str) -> Result<()> {
    let response = client.get(format!("{base}/funfact")).send().await?;

    if response.status() == StatusCode::OK {
        let fact: Value = response.json().await?;
        println!("\nFun Fact:");
        println!("   {}", text(&fact, "fact"));
        println!("   (ID: {})", text_or_number(&fact, "id"));
    } else {
        print_failure(response).await?;
    }

    Ok(())
}

async fn add_funfact(client: &Client, base: &str) -> Result<()> {
    let fact = prompt("\nEnter a fun fact to add: ");
    if fact.is_empty() {
        println!("Error: Fun fact cannot be empty.");
        return Ok(());
    }

    let response = client
        .post(format!("{base}/funfact"))
        .json(&json!({ "fact": fact }))
        .send()
        .await?;

    if response.status() == StatusCode::CREATED {
        let result: Value = response.json().await?;
        println!("\n{}", text(&result, "message"));
        println!("   Fact: {}", text(&result["fact"], "fact"));
    } else {
        print_failure(response).await?;
    }

    Ok(())
}

async fn add_reflection(client: &Client, base: &str) -> Result<()> {
    let reflection = prompt("\nEnter your reflection for today: ");
    if reflection.is_empty() {
        println!("Error: Reflection cannot be empty.");
        return Ok(());
    }

    let response = client
        .post(format!("{base}/reflection"))
        .json(&json!({ "reflection": reflection }))
        .send()
        .await?;

    if response.status() == StatusCode::CREATED {
        let result: Value = response.json().await?;
        println!("\n{}", text(&result, "message"));
        println!("   Date: {}", text(&result["reflection"], "date"));
        println!("   Reflection: {}", text(&result["reflection"], "reflection"));
    } else {
        print_failure(response).await?;
    }

    Ok(())
}

async fn view_today_reflection(client: &Client, base: &str) -> Result<()> {
    let response = client.get(format!("{base}/reflection/today")).send().await?;

    match response.status() {
        StatusCode::OK => {
            let reflection: Value = response.json().await?;
            println!("\nToday's Reflection:");
            println!("   Date: {}", text(&reflection, "date"));
            println!("   Reflection: {}", text(&reflection, "reflection"));
        }
        StatusCode::NOT_FOUND => {
            println!("\nNo reflection found for today.");
            println!("   Use option 4 to add a reflection.");
        }
        _ => print_failure(response).await?,
    }

    Ok(())
}

async fn view_goals(client: &Client, base: &str) -> Result<()> {
    let response = client.get(format!("{base}/goals")).send().await?;

    if response.status() == StatusCode::OK {
        let data: Value = response.json().await?;
        let goals = data["goals"].as_array().cloned().unwrap_or_default();

        println!("\nYour Goals ({} total):", text_or_number(&data, "count"));
        if goals.is_empty() {
            println!("   No goals yet. Use option 7 to create one!");
        } else {
            for goal in &goals {
                println!("   {}", goal_line(goal));
            }
        }
    } else {
        print_failure(response).await?;
    }

    Ok(())
}

async fn add_goal(client: &Client, base: &str) -> Result<()> {
    let goal = prompt("\nEnter a new goal: ");
    if goal.is_empty() {
        println!("Error: Goal cannot be empty.");
        return Ok(());
    }

    let response = client
        .post(format!("{base}/goals"))
        .json(&json!({ "goal": goal }))
        .send()
        .await?;

    if response.status() == StatusCode::CREATED {
        let result: Value = response.json().await?;
        println!("\n{}", text(&result, "message"));
        println!("   Goal: {}", text(&result["goal"], "goal"));
        println!("   ID: {}", text_or_number(&result["goal"], "id"));
    } else {
        print_failure(response).await?;
    }

    Ok(())
}

async fn complete_goal(client: &Client, base: &str) -> Result<()> {
    view_goals(client, base).await?;

    let input = prompt("\nEnter the ID of the goal to mark as completed: ");
    let Ok(goal_id) = input.parse::<u64>() else {
        println!("Error: Please enter a valid number.");
        return Ok(());
    };

    let response = client.put(format!("{base}/goals/{goal_id}")).send().await?;

    match response.status() {
        StatusCode::OK => {
            let result: Value = response.json().await?;
            println!("\n{}", text(&result, "message"));
            println!("   Goal: {}", text(&result["goal"], "goal"));
        }
        StatusCode::NOT_FOUND => println!("Error: Goal not found."),
        _ => print_failure(response).await?,
    }

    Ok(())
}

async fn print_failure(response: Response) -> Result<()> {
    let status = response.status();
    let body = response.text().await?;
    println!("Error: {} - {}", status.as_u16(), body);

    Ok(())
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string()
}

fn text_or_number(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "N/A".to_string(),
    }
}

fn goal_line(goal: &Value) -> String {
    let status = if goal["completed"].as_bool().unwrap_or(false) {
        "[DONE]"
    } else {
        "[IN PROGRESS]"
    };

    format!(
        "{status} [{}] {}",
        text_or_number(goal, "id"),
        text(goal, "goal")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_line_marks_completion() {
        let done = json!({ "id": 1, "goal": "Run a 10k", "completed": true });
        assert_eq!(goal_line(&done), "[DONE] [1] Run a 10k");

        let open = json!({ "id": 2, "goal": "Finish the book", "completed": false });
        assert_eq!(goal_line(&open), "[IN PROGRESS] [2] Finish the book");
    }

    #[test]
    fn text_falls_back_when_field_is_missing() {
        let value = json!({ "quote": "Stay curious." });
        assert_eq!(text(&value, "quote"), "Stay curious.");
        assert_eq!(text(&value, "author"), "N/A");
    }

    #[test]
    fn text_or_number_renders_numbers() {
        let value = json!({ "id": 7 });
        assert_eq!(text_or_number(&value, "id"), "7");
        assert_eq!(text_or_number(&value, "missing"), "N/A");
    }
}

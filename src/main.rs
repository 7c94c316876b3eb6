use std::{
    fs::{self, File},
    io::{self, Write},
};

use async_graphql::Request;
use clap::Parser;
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;
use tokio::io::AsyncReadExt;

mod base_connection;
mod connection_error;
mod cursor;
mod faction;
mod global_id;
mod node;
mod query;
mod ship;
mod ship_connection;
mod star_wars_data;

use query::{StarWarsSchema, build_schema};
use star_wars_data::StarWarsData;

const SCHEMA_PATH: &str = "./schemas/starwars.graphql";

/// Command line arguments to toggle schema generation instead of query execution.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generates GraphQL schema in `./schemas/starwars.graphql`.
    #[arg(long)]
    generate_schema: bool,
    /// GraphQL query to execute. Read from stdin if omitted.
    #[arg(long)]
    query: Option<String>,
}

/// Activates logger and parses arguments for optional schema generation. Otherwise executes a single query.
#[tokio::main]
async fn main() -> io::Result<()> {
    default_logger().env().init().map_err(io::Error::other)?;

    let args = Args::parse();
    let data = StarWarsData::load().map_err(io::Error::other)?;
    let schema = build_schema(data);
    if args.generate_schema {
        generate_schema(&schema)
    } else {
        let query = match args.query {
            Some(query) => query,
            None => read_query_from_stdin().await?,
        };
        execute_query(&schema, query).await
    }
}

/// Logger showing `info` and above unless overridden through `RUST_LOG`.
fn default_logger() -> SimpleLogger {
    SimpleLogger::new().with_level(LevelFilter::Info)
}

/// Writes the schema SDL to `SCHEMA_PATH`.
fn generate_schema(schema: &StarWarsSchema) -> io::Result<()> {
    fs::create_dir_all("./schemas")?;
    let mut file = File::create(SCHEMA_PATH)?;
    file.write_all(schema.sdl().as_bytes())?;
    info!("GraphQL schema: {} was successfully generated!", SCHEMA_PATH);
    Ok(())
}

/// Reads the whole query text from stdin.
async fn read_query_from_stdin() -> io::Result<String> {
    let mut query = String::new();
    tokio::io::stdin().read_to_string(&mut query).await?;
    Ok(query)
}

/// Executes a query and prints the JSON response to stdout.
async fn execute_query(schema: &StarWarsSchema, query: String) -> io::Result<()> {
    let json = render_response(schema, query).await?;
    println!("{}", json);
    Ok(())
}

/// Executes a query and serializes the response as pretty JSON.
async fn render_response(schema: &StarWarsSchema, query: String) -> io::Result<String> {
    let response = schema.execute(Request::new(query)).await;
    if !response.errors.is_empty() {
        info!("Query finished with {} error(s).", response.errors.len());
    }
    Ok(serde_json::to_string_pretty(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn schema() -> StarWarsSchema {
        build_schema(StarWarsData::load().unwrap())
    }

    #[test]
    fn logs_info_messages_by_default() {
        assert_eq!(default_logger().max_level(), LevelFilter::Info);
    }

    #[tokio::test]
    async fn renders_data_of_a_successful_query() {
        let query = r#"{ rebels { ships(first: 1) { edges { node { name } } } } }"#.to_string();
        let json: Value = serde_json::from_str(&render_response(&schema(), query).await.unwrap())
            .unwrap();
        assert_eq!(
            json,
            json!({
                "data": {
                    "rebels": { "ships": { "edges": [{ "node": { "name": "X-Wing" } }] } }
                }
            })
        );
    }

    #[tokio::test]
    async fn renders_data_and_errors_for_an_invalid_cursor() {
        let query = r#"{ rebels { ships(first: 1 after: "garbage") { edges { cursor } } } }"#
            .to_string();
        let json: Value = serde_json::from_str(&render_response(&schema(), query).await.unwrap())
            .unwrap();
        assert_eq!(json["data"], Value::Null);
        assert_eq!(json["errors"][0]["message"], "Cursor `garbage` is invalid.");
        assert_eq!(json["errors"][0]["path"], json!(["rebels", "ships"]));
    }

    #[test]
    fn writes_the_schema_sdl() {
        let sdl = schema().sdl();
        assert!(sdl.contains("interface Node"));
        assert!(sdl.contains("type ShipConnection"));
        assert!(sdl.contains("type PageInfo"));
    }
}

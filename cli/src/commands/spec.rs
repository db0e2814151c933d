use crate::commands::shared::OutputArgs;
use crate::commands::validators;
use crate::core::error::ApxError;
use crate::core::formatter::{self, OutputFormat};
use crate::core::logger::Logger;
use apx_lib::spec::{EndpointEntry, SpecCatalog, SpecSession};
use apx_lib::MethodColor;
use clap::{Args, Subcommand};
use colored::{ColoredString, Colorize};
use std::time::Instant;

const NO_ENDPOINTS: &str = "No endpoints found in this specification.";
const NO_PARAMETERS: &str = "No parameters for this endpoint.";

#[derive(Debug, Args)]
#[command(about = "Browse OpenAPI / Swagger specifications")]
pub struct SpecCommand {
    #[command(subcommand)]
    pub command: SpecSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum SpecSubcommand {
    #[command(about = "Fetch a spec and list its endpoints")]
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(
        value_name = "URL",
        help = "URL of an openapi.json or swagger.json file",
        value_parser = validators::validate_spec_url
    )]
    pub url: String,

    #[arg(
        short = 'x',
        long = "expand",
        help = "Show parameters, request body and responses of each endpoint"
    )]
    pub expand: bool,

    #[arg(
        short = 'p',
        long = "path",
        value_name = "PATH",
        help = "Only show endpoints of this path"
    )]
    pub path: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn execute_analyze(args: &AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.url.is_empty() {
        return Err(ApxError::Validation("Please enter a URL first".to_string()).into());
    }

    let mut session = SpecSession::new();

    Logger::debug(&format!("Loading spec from {}", args.url));
    let start_time = Instant::now();
    session.load(&args.url).await.map_err(ApxError::from)?;
    Logger::debug(&format!(
        "Spec loaded in {} ms",
        start_time.elapsed().as_millis()
    ));

    let mut catalog = session
        .catalog()
        .ok_or_else(|| ApxError::Generic("No spec loaded".to_string()))?;
    crate::debug_log!("Found {} endpoint(s)", catalog.endpoints.len());

    if let Some(path) = &args.path {
        let selected: Vec<EndpointEntry> = catalog.endpoints_for_path(path).cloned().collect();
        if selected.is_empty() {
            return Err(ApxError::Validation(format!("Path not found in spec: {path}")).into());
        }
        catalog.endpoints = selected;
    }

    match args.output.output {
        OutputFormat::Json => print!("{}", formatter::get_formatter(&OutputFormat::Json).format(&catalog)),
        OutputFormat::Text => print!("{}", render_catalog_text(&catalog, args.expand)),
    }

    Ok(())
}

fn method_tag(endpoint: &EndpointEntry) -> ColoredString {
    let method = endpoint.method.as_str();
    match endpoint.color {
        MethodColor::Blue => method.blue().bold(),
        MethodColor::Green => method.green().bold(),
        MethodColor::Orange => method.truecolor(255, 165, 0).bold(),
        MethodColor::Red => method.red().bold(),
        MethodColor::Gray => method.bright_black().bold(),
    }
}

pub fn render_catalog_text(catalog: &SpecCatalog, expand: bool) -> String {
    let mut out = format!("{}\n", catalog.title.bold());
    out.push_str(&format!("Version: {}\n", catalog.version));
    if !catalog.description.is_empty() {
        out.push_str(&format!("{}\n", catalog.description));
    }

    if !catalog.servers.is_empty() {
        out.push_str("\nServers:\n");
        for server in &catalog.servers {
            out.push_str(&format!("  {server}\n"));
        }
    }

    out.push_str("\nEndpoints:\n");
    if catalog.is_empty() {
        out.push_str(&format!("  {NO_ENDPOINTS}\n"));
        return out;
    }

    for (i, endpoint) in catalog.endpoints.iter().enumerate() {
        if expand && i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "  {} {} - {}\n",
            method_tag(endpoint),
            endpoint.path,
            endpoint.summary
        ));
        if expand {
            out.push_str(&render_endpoint_details(endpoint));
        }
    }

    out
}

fn render_endpoint_details(endpoint: &EndpointEntry) -> String {
    let mut out = String::new();

    if !endpoint.description.is_empty() {
        out.push_str(&formatter::render_value(
            &serde_json::Value::String(endpoint.description.clone()),
            4,
        ));
    }

    out.push_str("    Parameters:\n");
    if endpoint.parameters.is_empty() {
        out.push_str(&format!("      {NO_PARAMETERS}\n"));
    }
    for param in &endpoint.parameters {
        let location = param
            .location
            .as_ref()
            .map(|l| l.as_str())
            .unwrap_or("unspecified");
        let required = if param.required { "required" } else { "optional" };
        out.push_str(&format!(
            "      - {} ({location}) {required}\n",
            param.name
        ));
        if !param.description.is_empty() {
            out.push_str(&format!("        {}\n", param.description));
        }
    }

    if let Some(media_types) = &endpoint.request_body {
        out.push_str("    Request Body:\n");
        for media in media_types {
            out.push_str(&format!("      {}:\n", media.media_type));
            for line in media.schema.lines() {
                out.push_str(&format!("        {line}\n"));
            }
        }
    }

    out.push_str("    Responses:\n");
    for response in &endpoint.responses {
        out.push_str(&format!(
            "      - {}: {}\n",
            response.status, response.description
        ));
    }

    out
}

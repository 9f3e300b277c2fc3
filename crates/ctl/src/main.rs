use anyhow::{bail, Context};
use ares_core::api::{AnalyzeRequest, ErrorBody, WaitlistListing, WaitlistRequest, WaitlistResponse};
use ares_core::model::AnalysisResult;
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;

#[derive(Parser, Debug)]
#[command(name = "aresctl", about = "Command-line client for the ARES server")]
struct Args {
    /// Server base URL.
    #[arg(long, global = true, default_value = "http://127.0.0.1:3000")]
    server: String,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Analyse a file (or stdin) and print the findings.
    Analyze {
        /// Input file. Reads stdin when omitted.
        #[arg(long)]
        file: Option<String>,
        /// Print the raw JSON response instead of a summary.
        #[arg(long)]
        json: bool,
    },
    Waitlist {
        #[command(subcommand)]
        wl: WaitlistCmd,
    },
}

#[derive(Subcommand, Debug)]
enum WaitlistCmd {
    /// Submit a waitlist entry.
    Join {
        #[arg(long)]
        name: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        email: String,
    },
    /// Print every stored entry.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let client = reqwest::Client::new();
    let base = args.server.trim_end_matches('/');

    match args.cmd {
        Cmd::Analyze { file, json } => {
            let input = match file {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("read {path}"))?,
                None => {
                    let mut buf = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut buf)
                        .await
                        .context("read stdin")?;
                    buf
                }
            };

            let resp = client
                .post(format!("{base}/api/analyze"))
                .json(&AnalyzeRequest { input: Some(input) })
                .send()
                .await
                .context("send analyze request")?;
            if !resp.status().is_success() {
                bail!("analyze failed: {}", error_text(resp).await);
            }
            let result: AnalysisResult = resp.json().await.context("parse analysis")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_analysis(&result);
            }
        }
        Cmd::Waitlist { wl } => match wl {
            WaitlistCmd::Join {
                name,
                company,
                email,
            } => {
                let req = WaitlistRequest {
                    name: Some(name),
                    company: Some(company),
                    email: Some(email),
                };
                let resp = client
                    .post(format!("{base}/api/waitlist"))
                    .json(&req)
                    .send()
                    .await
                    .context("send waitlist request")?;
                if !resp.status().is_success() {
                    bail!("waitlist rejected: {}", error_text(resp).await);
                }
                let ack: WaitlistResponse = resp.json().await.context("parse response")?;
                println!("{} at {}", ack.message, ack.timestamp);
            }
            WaitlistCmd::List => {
                let resp = client
                    .get(format!("{base}/api/waitlist"))
                    .send()
                    .await
                    .context("send list request")?;
                if !resp.status().is_success() {
                    bail!("list failed: {}", error_text(resp).await);
                }
                let listing: WaitlistListing = resp.json().await.context("parse listing")?;
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
        },
    }

    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    println!("➜ ares analyze --input-type auto --defensive-only");
    for step in &result.steps {
        println!("  {step}");
    }
    println!("{}", result.raw_output);
    println!();
    for f in &result.findings {
        println!("[{}] {} ({})", f.severity, f.title, f.id);
        println!("    {}", f.description);
        println!("    component:   {}", f.affected_component);
        println!("    remediation: {}", f.remediation_explanation);
        if let Some(script) = &f.remediation_script {
            for line in script.lines() {
                println!("      | {line}");
            }
        }
    }
}

async fn error_text(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => match body.details {
            Some(details) => format!("{status} {} ({details})", body.error),
            None => format!("{status} {}", body.error),
        },
        Err(_) => status.to_string(),
    }
}

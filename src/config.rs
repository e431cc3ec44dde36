use std::io::{BufRead, Write};

use clap::Parser;

use crate::collectors::{headhunter, superjob};
use crate::error::{AppError, Result};
use crate::models::SearchCriteria;
use crate::models::criteria::{DEFAULT_PAGE_SIZE, DEFAULT_REGION};
use crate::store::DEFAULT_OUTPUT;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "vacancy-aggregator",
    about = "Rank HeadHunter and SuperJob vacancies by salary"
)]
pub struct Config {
    /// Search text; prompts interactively when omitted
    #[arg(long, env = "VACANCY_KEYWORD")]
    pub keyword: Option<String>,

    /// Region name as the platforms spell it
    #[arg(long, env = "VACANCY_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Vacancies requested from each platform
    #[arg(
        long,
        env = "VACANCY_COUNT",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Output JSON file
    #[arg(long, env = "VACANCY_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    #[arg(long, env = "HH_BASE_URL", default_value = headhunter::DEFAULT_BASE_URL)]
    pub hh_base_url: String,

    #[arg(long, env = "SUPERJOB_BASE_URL", default_value = superjob::DEFAULT_BASE_URL)]
    pub superjob_base_url: String,

    /// SuperJob application key sent as X-Api-App-Id
    #[arg(long, env = "SUPERJOB_APP_ID")]
    pub superjob_app_id: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,
}

impl Config {
    /// Search criteria from the flags, or from stdin when no keyword was given.
    pub fn criteria(&self) -> Result<SearchCriteria> {
        match &self.keyword {
            Some(keyword) => Ok(SearchCriteria::new(
                keyword.clone(),
                self.region.clone(),
                self.count,
            )),
            None => {
                let stdin = std::io::stdin();
                prompt_criteria(&mut stdin.lock(), &mut std::io::stdout())
            }
        }
    }
}

/// Ask for keyword, region and count. Empty answers take the defaults.
pub fn prompt_criteria<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SearchCriteria> {
    let keyword = ask(input, output, "Search text for vacancy titles:")?;

    let region = ask(
        input,
        output,
        &format!("Region (default: {DEFAULT_REGION}):"),
    )?;
    let region = if region.is_empty() {
        DEFAULT_REGION.to_string()
    } else {
        region
    };

    let count = ask(
        input,
        output,
        &format!("Vacancies per platform, up to 100 (default: {DEFAULT_PAGE_SIZE}):"),
    )?;
    let count = if count.is_empty() {
        DEFAULT_PAGE_SIZE
    } else {
        count
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| AppError::InvalidInput(format!("'{count}' is not a positive number")))?
    };

    Ok(SearchCriteria::new(keyword, region, count))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    writeln!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

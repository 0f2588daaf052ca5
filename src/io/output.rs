use std::io::Write;

use colored::*;

use crate::advisory::{PaybackAdvisory, RatioTier};
use crate::core::MonthlyPoint;
use crate::history::TrendReport;
use crate::session::AnalysisReport;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
    fn write_trend(&mut self, trend: &TrendReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trend(&mut self, trend: &TrendReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(trend)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_series_table(&mut self, points: &im::Vector<MonthlyPoint>) -> anyhow::Result<()> {
        writeln!(self.writer, "| Month | LTV | CAC | Ratio |")?;
        writeln!(self.writer, "|-------|-----|-----|-------|")?;
        for point in points {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                point.month.format("%B %Y"),
                format_amount(point.ltv),
                format_amount(point.cac),
                format_ratio(point.ratio),
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# LTV/CAC Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Scenario: {}", report.scenario)?;
        writeln!(
            self.writer,
            "Analysis month: {}",
            report.analysis_month.format("%B %Y")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| LTV | {:.0} |", report.ltv)?;
        writeln!(self.writer, "| CAC | {:.0} |", report.cac)?;
        writeln!(self.writer, "| LTV/CAC | {:.2} |", report.assessment.ratio)?;
        writeln!(
            self.writer,
            "| Payback | {:.1} months |",
            report.assessment.payback_months
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** - {}",
            report.assessment.tier.label(),
            report.assessment.tier.advice()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.assessment.advisory.advice())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.benchmark)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## History (last 6 months)")?;
        writeln!(self.writer)?;
        self.write_series_table(&report.monthly_series)?;
        Ok(())
    }

    fn write_trend(&mut self, trend: &TrendReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Calculation History: {}", trend.username)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Window ending {}",
            trend.reference_month.format("%B %Y")
        )?;
        writeln!(self.writer)?;
        self.write_series_table(&trend.points)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header(&format!("{} Analysis", report.scenario));
        print_summary(report);
        print_assessment(report);
        print_series(&report.monthly_series);
        Ok(())
    }

    fn write_trend(&mut self, trend: &TrendReport) -> anyhow::Result<()> {
        print_header(&format!("Calculation History: {}", trend.username));
        println!(
            "Window ending {}",
            trend.reference_month.format("%B %Y").to_string().bold()
        );
        println!();
        print_series(&trend.points);
        Ok(())
    }
}

fn print_header(title: &str) {
    println!("{}", title.bold().blue());
    println!("{}", "=".repeat(title.len()).blue());
    println!();
}

fn print_summary(report: &AnalysisReport) {
    println!("Summary:");
    println!(
        "  Analysis month: {}",
        report.analysis_month.format("%B %Y")
    );
    println!("  LTV: {:.0}", report.ltv);
    println!("  CAC: {:.0}", report.cac);

    let ratio = format!("{:.2}", report.assessment.ratio);
    let ratio_display = match report.assessment.tier {
        RatioTier::Unsustainable => ratio.red(),
        RatioTier::MarginallyViable => ratio.yellow(),
        RatioTier::Healthy => ratio.green(),
    };
    println!("  LTV/CAC ratio: {ratio_display}");

    let payback = format!("{:.1} months", report.assessment.payback_months);
    let payback_display = match report.assessment.advisory {
        PaybackAdvisory::Excellent => payback.green(),
        PaybackAdvisory::Good => payback.yellow(),
        PaybackAdvisory::TooSlow => payback.red(),
    };
    println!("  Payback period: {payback_display}");
    println!();
}

fn print_assessment(report: &AnalysisReport) {
    let tier_label = match report.assessment.tier {
        RatioTier::Unsustainable => report.assessment.tier.label().red().bold(),
        RatioTier::MarginallyViable => report.assessment.tier.label().yellow().bold(),
        RatioTier::Healthy => report.assessment.tier.label().green().bold(),
    };
    println!("{tier_label}: {}", report.assessment.tier.advice());
    println!("{}", report.assessment.advisory.advice());
    println!("{}", report.benchmark.dimmed());
    if let Some(id) = report.saved {
        println!("{} record #{id} saved", "✓".green());
    }
    println!();
}

fn print_series(points: &im::Vector<MonthlyPoint>) {
    println!("Last 6 months:");
    println!(
        "  {:<16} {:>14} {:>14} {:>8}",
        "Month", "LTV", "CAC", "Ratio"
    );
    for point in points {
        println!(
            "  {:<16} {:>14} {:>14} {:>8}",
            point.month.format("%B %Y").to_string(),
            format_amount(point.ltv),
            format_amount(point.cac),
            format_ratio(point.ratio),
        );
    }
}

fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.0}"),
        None => "-".to_string(),
    }
}

fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

//! Rendering of evaluation metrics and records

use super::{EvaluationRecord, Metrics};
use anyhow::Result;
use std::io::Write;

/// Write a human-readable metrics report
pub fn write_text<W: Write>(writer: &mut W, metrics: &Metrics) -> Result<()> {
    writeln!(writer, "Evaluation Report")?;
    writeln!(writer, "=================")?;
    writeln!(writer)?;
    writeln!(writer, "Records:   {}", metrics.total)?;
    writeln!(writer, "Correct:   {}", metrics.correct)?;
    writeln!(writer, "Errors:    {}", metrics.errors)?;
    writeln!(writer)?;
    writeln!(writer, "Accuracy:  {:.1}%", metrics.accuracy * 100.0)?;
    writeln!(writer, "Precision: {:.1}%", metrics.precision * 100.0)?;
    writeln!(writer, "Recall:    {:.1}%", metrics.recall * 100.0)?;
    writeln!(writer, "F1 score:  {:.1}%", metrics.f1 * 100.0)?;
    writeln!(writer)?;
    writeln!(writer, "Confusion matrix")?;
    writeln!(
        writer,
        "  TP: {}  FP: {}",
        metrics.confusion.true_positive, metrics.confusion.false_positive
    )?;
    writeln!(
        writer,
        "  FN: {}  TN: {}",
        metrics.confusion.false_negative, metrics.confusion.true_negative
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Response time: mean {:.0}ms, min {}ms, max {}ms",
        metrics.response_time.mean, metrics.response_time.min, metrics.response_time.max
    )?;
    if let Some(f) = &metrics.factuality {
        writeln!(
            writer,
            "Factuality:    mean {:.3}, std dev {:.3}",
            f.mean, f.std_dev
        )?;
    }

    for (title, slice) in [
        ("By category", &metrics.by_category),
        ("By difficulty", &metrics.by_difficulty),
        ("By language", &metrics.by_language),
    ] {
        if slice.is_empty() {
            continue;
        }
        writeln!(writer)?;
        writeln!(writer, "{title}")?;
        for (key, accuracy) in slice {
            writeln!(writer, "  {key}: {:.1}%", accuracy * 100.0)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write metrics as pretty-printed JSON
pub fn write_json<W: Write>(writer: &mut W, metrics: &Metrics) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, metrics)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

const CSV_HEADER: &str =
    "id,claim,groundTruth,prediction,correct,responseTime,factuality,category,difficulty,language,error";

/// Write the raw records as CSV with the interchange column names
pub fn write_csv<W: Write>(writer: &mut W, records: &[EvaluationRecord]) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{}",
            csv_field(&r.id),
            csv_field(&r.claim),
            r.ground_truth,
            opt_field(r.prediction.map(|p| p.to_string())),
            r.correct,
            r.response_time,
            opt_field(r.factuality.map(|f| f.to_string())),
            csv_field(&r.category),
            csv_field(&r.difficulty),
            csv_field(&r.language),
            opt_field(r.error.as_ref().map(|e| csv_field(e))),
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn opt_field(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Quote a field when it contains a delimiter, quote, or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EvaluationRecord {
        EvaluationRecord {
            id: "t1".to_string(),
            claim: "Water boils at 100C, at sea level.".to_string(),
            ground_truth: true,
            prediction: Some(true),
            correct: true,
            response_time: 950,
            factuality: Some(0.92),
            category: "science".to_string(),
            difficulty: "easy".to_string(),
            language: "en".to_string(),
            error: None,
        }
    }

    #[test]
    fn text_report_includes_headline_numbers() {
        let metrics = Metrics::compute(&[record()]).unwrap();
        let mut buf = Vec::new();
        write_text(&mut buf, &metrics).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Accuracy:  100.0%"));
        assert!(out.contains("TP: 1"));
        assert!(out.contains("mean 950ms"));
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[record()]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        let row = lines.next().unwrap();
        assert!(row.contains("\"Water boils at 100C, at sea level.\""));
        assert!(row.contains("t1"));
    }

    #[test]
    fn csv_escapes_embedded_quotes() {
        assert_eq!(csv_field(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn json_report_round_trips() {
        let metrics = Metrics::compute(&[record()]).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &metrics).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["accuracy"], 1.0);
    }
}

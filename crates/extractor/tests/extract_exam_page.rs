use extractor::{
    HtmlExtractor, QuestionSearch, QuestionType,
    canonical::{QuestionValidator, store},
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

const EXAM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Modules 1 - 3 Exam Answers</title></head>
<body>
<div class="thecontent">
  <p>Read the questions carefully.</p>
  <p><strong>1. Which two protocols operate at the transport layer? (Choose two.)</strong></p>
  <ul>
    <li class="correct_answer">TCP</li>
    <li>IP</li>
    <li class="correct_answer">UDP</li>
    <li>ARP</li>
  </ul>
  <div class="message_box success">
    <p><strong>Explanation:</strong> TCP and UDP are transport layer protocols.</p>
  </div>
  <p><strong>2. Match each description to its term.</strong></p>
  <p><img src="match.png" alt="exhibit"></p>
  <table>
    <tbody>
      <tr><td>connects devices in a LAN</td><td>switch</td></tr>
      <tr><td>forwards between networks</td><td>router</td></tr>
      <tr><td></td></tr>
    </tbody>
  </table>
  <p><strong>3. Refer to the exhibit. What is the default gateway?</strong></p>
  <p><strong>4. Which command saves the configuration?</strong></p>
  <ul>
    <li>reload</li>
    <li class="correct_answer">copy running-config startup-config</li>
  </ul>
</div>
</body>
</html>
"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join("extractor-integration").join(name)
}

#[tokio::test]
async fn test_extract_save_and_reload() {
    let input = temp_path("exam.html");
    let output = temp_path("extracted_questions.json");
    tokio::fs::create_dir_all(input.parent().unwrap()).await.unwrap();
    tokio::fs::write(&input, EXAM_PAGE).await.unwrap();
    tokio::fs::remove_file(&output).await.ok();

    let questions = HtmlExtractor::default()
        .extract_and_save(&input, &output)
        .await
        .unwrap();

    let numbers: Vec<_> = questions.iter().map(|q| q.question_number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3", "4"]);

    assert_eq!(questions[0].options, vec!["TCP", "IP", "UDP", "ARP"]);
    assert_eq!(questions[0].correct_answers, vec!["TCP", "UDP"]);
    assert_eq!(
        questions[0].explanation,
        "Explanation: TCP and UDP are transport layer protocols."
    );

    assert_eq!(questions[1].r#type, QuestionType::Matching);
    assert_eq!(
        questions[1].options,
        vec![
            "connects devices in a LAN : switch",
            "forwards between networks : router"
        ]
    );
    assert_eq!(questions[1].correct_answers, questions[1].options);

    assert!(questions[2].options.is_empty());
    assert_eq!(questions[2].explanation, "N/A");

    assert_eq!(
        questions[3].correct_answers,
        vec!["copy running-config startup-config"]
    );

    let reloaded = store::load_questions(&output).await.unwrap();
    assert_eq!(reloaded, questions);

    let report = QuestionValidator::validate(&reloaded).unwrap();
    assert!(report.errors.is_empty());
    assert!(!report.warnings.is_empty());

    let search = QuestionSearch::new(&reloaded);
    let hits = search.filter("router");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].question_number, "2");

    tokio::fs::remove_file(&input).await.ok();
    tokio::fs::remove_file(&output).await.ok();
}

#[tokio::test]
async fn test_missing_input_writes_nothing() {
    let input = temp_path("does-not-exist.html");
    let output = temp_path("never-written.json");
    tokio::fs::remove_file(&output).await.ok();

    let questions = HtmlExtractor::default()
        .extract_and_save(&input, &output)
        .await
        .unwrap();

    assert!(questions.is_empty());
    assert!(!output.exists());
}

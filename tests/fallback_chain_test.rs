use std::sync::Arc;
use std::time::Duration;
use student_helper::chain::FallbackChain;
use student_helper::config::Config;
use student_helper::processor::Processor;
use student_helper::services::TextService;
use student_helper::task::{TaskKind, TextTask};

mod common;
use common::mock_service::{CountingGenerator, MockService};
use common::ARTICLE;

#[tokio::test]
async fn test_third_endpoint_answers_after_two_failures() {
    let first = Arc::new(MockService::failing("First"));
    let second = Arc::new(MockService::failing("Second"));
    let third = Arc::new(MockService::new("Third", "Short summary."));
    let local = Arc::new(CountingGenerator::default());

    let chain = FallbackChain::new(
        vec![
            first.clone() as Arc<dyn TextService>,
            second.clone(),
            third.clone(),
        ],
        local.clone(),
        Duration::from_secs(1),
    );

    let output = chain.execute(&TextTask::new(TaskKind::Summarize, ARTICLE)).await;

    assert!(output.html.contains("Short summary."));
    assert!(output.html.contains("(Third)"));
    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 1);
    assert_eq!(third.call_count(), 1);
    assert_eq!(local.count(), 0, "local generator must not run");
}

#[tokio::test]
async fn test_later_endpoints_are_not_called_after_success() {
    let first = Arc::new(MockService::new("First", "answer"));
    let second = Arc::new(MockService::new("Second", "unused"));
    let local = Arc::new(CountingGenerator::default());

    let chain = FallbackChain::new(
        vec![first.clone() as Arc<dyn TextService>, second.clone()],
        local.clone(),
        Duration::from_secs(1),
    );
    chain.execute(&TextTask::new(TaskKind::Explain, "gravity")).await;

    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 0);
    assert_eq!(local.count(), 0);
}

#[tokio::test]
async fn test_all_failures_reach_local_once() {
    let endpoints: Vec<Arc<dyn TextService>> = vec![
        Arc::new(MockService::failing("A")),
        Arc::new(MockService::failing("B")),
    ];
    let local = Arc::new(CountingGenerator::default());
    let chain = FallbackChain::new(endpoints, local.clone(), Duration::from_secs(1));

    let output = chain.execute(&TextTask::new(TaskKind::Grammar, "hello")).await;
    assert_eq!(output.html, "local answer for grammar");
    assert_eq!(local.count(), 1);
}

#[tokio::test]
async fn test_processor_uses_injected_endpoints() {
    let mock = Arc::new(MockService::new("Mock", "I **really** agree."));
    let config = Config {
        offline: true,
        ..Config::default()
    };
    let processor = Processor::with_generator(config, Arc::new(CountingGenerator::default()))
        .with_endpoints(TaskKind::Grammar, vec![mock.clone() as Arc<dyn TextService>]);

    let output = processor
        .submit(TextTask::new(TaskKind::Grammar, "i really agree"))
        .await
        .unwrap();

    assert_eq!(mock.call_count(), 1);
    // Markdown from the service is formatted on the way out
    assert!(output.html.contains("I <strong>really</strong> agree."));
    assert!(output.html.contains("Grammar Check (Mock)"));
}

#[tokio::test]
async fn test_simulated_delay_applies_to_local_answers() {
    let config = Config {
        offline: true,
        simulated_delay_ms: 50,
        ..Config::default()
    };
    let processor = Processor::new(config);

    let start = std::time::Instant::now();
    processor
        .submit(TextTask::new(TaskKind::EssayIdeas, "renewable energy"))
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));
}

//! Log events emitted on rayon workers still carry the run's span.

use std::io::Write;
use std::sync::{Arc, Mutex};

use resumerank_common::TextCorpus;
use resumerank_ranker::{RankingPipeline, ScoringConfig};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_parallel_feature_events_inside_ranking_run() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    // Global: rayon workers never see a thread-local default subscriber.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .init();

    let corpus = TextCorpus::from_pairs([
        ("a", "expert rust developer, certified"),
        ("b", "basic python project exposure"),
        ("c", "web website designer"),
    ]);
    let pipeline = RankingPipeline::new(ScoringConfig { parallel: true, ..Default::default() }).unwrap();
    pipeline.report(&corpus);

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let feature_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("Feature column computed"))
        .collect();
    assert_eq!(feature_lines.len(), 5, "{output}");
    assert!(feature_lines.iter().all(|line| line.contains("ranking_run")), "{output}");
}

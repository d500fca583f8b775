use super::*;
use async_trait::async_trait;
use forge_domain::{GenerationPhase, Progress, SequenceRandom};
use std::time::Duration;

// ==================== Test Mocks ====================

struct MockGenerator {
    image: Result<String, GeneratorError>,
    traits: Result<Vec<String>, GeneratorError>,
    delay: Duration,
    image_prompts: Mutex<Vec<String>>,
    traits_prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    fn new() -> Self {
        Self {
            image: Ok("aW1hZ2U=".to_string()),
            traits: Ok(vec![
                "Brave".to_string(),
                "Loyal".to_string(),
                "Impulsive".to_string(),
            ]),
            delay: Duration::from_millis(100),
            image_prompts: Mutex::new(Vec::new()),
            traits_prompts: Mutex::new(Vec::new()),
        }
    }

    fn with_image(mut self, image: Result<String, GeneratorError>) -> Self {
        self.image = image;
        self
    }

    fn with_traits(mut self, traits: Result<Vec<String>, GeneratorError>) -> Self {
        self.traits = traits;
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl CharacterGenerator for MockGenerator {
    async fn generate_character_image(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.image_prompts.lock().unwrap().push(prompt.to_string());
        tokio::time::sleep(self.delay).await;
        self.image.clone()
    }

    async fn generate_character_traits(
        &self,
        prompt: &str,
    ) -> Result<Vec<String>, GeneratorError> {
        self.traits_prompts.lock().unwrap().push(prompt.to_string());
        tokio::time::sleep(self.delay).await;
        self.traits.clone()
    }
}

#[derive(Default)]
struct RecordingProgress {
    starts: Mutex<usize>,
    values: Mutex<Vec<u8>>,
    completions: Mutex<Vec<GenerationResult>>,
    settled: Mutex<usize>,
}

impl GenerationProgressNotifier for RecordingProgress {
    fn on_generation_start(&self, _draft: &CharacterDraft) {
        *self.starts.lock().unwrap() += 1;
    }

    fn on_progress(&self, progress: Progress) {
        self.values.lock().unwrap().push(progress.value());
    }

    fn on_generation_complete(&self, result: &GenerationResult) {
        self.completions.lock().unwrap().push(result.clone());
    }

    fn on_settled(&self) {
        *self.settled.lock().unwrap() += 1;
    }
}

#[derive(Default)]
struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl GenerationLogger for RecordingLogger {
    fn log(&self, event: GenerationLogEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}

fn use_case(generator: Arc<MockGenerator>, draft: CharacterDraft) -> GenerateCharacterUseCase {
    GenerateCharacterUseCase::new(generator, Arc::new(SequenceRandom::constant(5))).with_draft(draft)
}

// ==================== Workflow ====================

#[tokio::test(start_paused = true)]
async fn test_success_without_traits() {
    let generator = Arc::new(MockGenerator::new());
    let uc = use_case(generator.clone(), CharacterDraft::default());

    let attempt = uc.generate().await;
    let result = attempt.result().expect("completed").clone();

    assert_eq!(result.image(), Some("data:image/jpeg;base64,aW1hZ2U="));
    let attributes = result.attributes().expect("attributes rolled");
    assert!(attributes.iter().all(|(_, s)| (3..=18).contains(&s)));
    assert!(result.traits().is_none());
    assert!(result.error().is_none());

    assert_eq!(
        generator.image_prompts.lock().unwrap().as_slice(),
        [CharacterPromptTemplate::image_prompt(&CharacterDraft::default())]
    );
    assert!(generator.traits_prompts.lock().unwrap().is_empty());

    let state = uc.snapshot();
    assert_eq!(state.phase, GenerationPhase::Success);
    assert_eq!(state.progress, Progress::COMPLETE);
    assert!(!state.loading);
}

#[tokio::test(start_paused = true)]
async fn test_success_with_traits() {
    let generator = Arc::new(MockGenerator::new());
    let draft = CharacterDraft::default().with_random_traits(true);
    let uc = use_case(generator.clone(), draft.clone());

    let result = uc.generate().await.result().cloned().unwrap();

    let expected = ["Brave", "Loyal", "Impulsive"].map(String::from);
    assert_eq!(result.traits(), Some(expected.as_slice()));
    assert_eq!(
        generator.traits_prompts.lock().unwrap().as_slice(),
        [CharacterPromptTemplate::traits_prompt(&draft)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_requested_but_empty_traits_are_absent() {
    let generator = Arc::new(MockGenerator::new().with_traits(Ok(vec![])));
    let uc = use_case(generator, CharacterDraft::default().with_random_traits(true));

    let result = uc.generate().await.result().cloned().unwrap();
    assert!(result.is_success());
    assert!(result.traits().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_image_failure() {
    let generator = Arc::new(
        MockGenerator::new()
            .with_image(Err(GeneratorError::RequestFailed("quota exceeded".to_string()))),
    );
    let uc = use_case(generator, CharacterDraft::default());

    let result = uc.generate().await.result().cloned().unwrap();
    assert_eq!(
        result.error(),
        Some("Failed to generate character: Request failed: quota exceeded")
    );
    assert!(result.image().is_none());
    assert!(result.attributes().is_none());
    assert!(result.traits().is_none());

    let state = uc.snapshot();
    assert_eq!(state.phase, GenerationPhase::Failure);
    assert_eq!(state.progress, Progress::COMPLETE);
    assert!(!state.loading);
}

#[tokio::test(start_paused = true)]
async fn test_traits_failure_aborts_successful_image() {
    let generator = Arc::new(MockGenerator::new().with_traits(Err(GeneratorError::Timeout)));
    let uc = use_case(generator, CharacterDraft::default().with_random_traits(true));

    let result = uc.generate().await.result().cloned().unwrap();
    assert!(result.is_failure());
    assert!(result.image().is_none());
    assert!(result.attributes().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_unknown_error_uses_generic_message() {
    let generator = Arc::new(MockGenerator::new().with_image(Err(GeneratorError::Unknown)));
    let uc = use_case(generator, CharacterDraft::default());

    let result = uc.generate().await.result().cloned().unwrap();
    assert_eq!(
        result.error(),
        Some("Failed to generate character: An unknown error occurred. Please try again.")
    );
}

#[tokio::test(start_paused = true)]
async fn test_blank_name_is_skipped() {
    let generator = Arc::new(MockGenerator::new());
    let uc = use_case(generator.clone(), CharacterDraft::default().with_name("   "));
    let before = uc.snapshot();

    assert_eq!(uc.generate().await, GenerationAttempt::Skipped);
    assert_eq!(uc.snapshot(), before);
    assert!(generator.image_prompts.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_second_generate_while_loading_is_skipped() {
    let generator = Arc::new(MockGenerator::new());
    let uc = use_case(generator.clone(), CharacterDraft::default());

    let (first, second) = tokio::join!(uc.generate(), uc.generate());

    assert!(matches!(first, GenerationAttempt::Completed(_)));
    assert_eq!(second, GenerationAttempt::Skipped);
    assert_eq!(generator.image_prompts.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_previous_result_cleared_on_start() {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(2)));
    let uc = Arc::new(use_case(generator, CharacterDraft::default()));
    uc.generate().await;
    assert!(uc.snapshot().result.is_success());

    let task = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let state = uc.snapshot();
    assert!(state.loading);
    assert_eq!(state.phase, GenerationPhase::Loading);
    assert!(state.result.is_empty());
    assert_eq!(state.progress, Progress::ZERO);

    task.await.unwrap();
}

// ==================== Progress ====================

#[tokio::test(start_paused = true)]
async fn test_progress_advances_while_waiting() {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(2)));
    let uc = Arc::new(use_case(generator, CharacterDraft::default()));

    let task = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });

    // ticks at 410, 820 and 1230 ms, +5 each
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let state = uc.snapshot();
    assert!(state.loading);
    assert_eq!(state.progress.value(), 15);

    task.await.unwrap();
    assert_eq!(uc.snapshot().progress, Progress::COMPLETE);
}

#[tokio::test(start_paused = true)]
async fn test_progress_stalls_below_complete() {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(60)));
    let uc = Arc::new(use_case(generator, CharacterDraft::default()));

    let mut rx = uc.subscribe();
    let task = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });

    let mut last = 0;
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        assert!(state.progress.value() >= last, "progress went backwards");
        last = state.progress.value();
        if state.phase != GenerationPhase::Loading {
            break;
        }
        assert!(state.progress.value() <= Progress::DEFAULT_CEILING);
    }

    task.await.unwrap();
    assert_eq!(last, 100);
}

#[tokio::test(start_paused = true)]
async fn test_ticker_stops_after_completion() {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(1)));
    let uc = use_case(generator, CharacterDraft::default());
    uc.generate().await;

    tokio::time::sleep(Duration::from_secs(5)).await;
    let state = uc.snapshot();
    assert_eq!(state.progress, Progress::COMPLETE);
    assert!(!state.loading);
}

#[tokio::test(start_paused = true)]
async fn test_loading_stays_true_during_settle_delay() {
    let generator = Arc::new(MockGenerator::new());
    let uc = Arc::new(use_case(generator, CharacterDraft::default()));

    let task = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });

    // requests finish at 100 ms, settle at 600 ms
    tokio::time::sleep(Duration::from_millis(300)).await;
    let state = uc.snapshot();
    assert_eq!(state.phase, GenerationPhase::Success);
    assert_eq!(state.progress, Progress::COMPLETE);
    assert!(state.loading);

    task.await.unwrap();
    assert!(!uc.snapshot().loading);
}

#[tokio::test(start_paused = true)]
async fn test_progress_notifier_sees_lifecycle() {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(1)));
    let progress = Arc::new(RecordingProgress::default());
    let uc = use_case(generator, CharacterDraft::default()).with_progress(progress.clone());

    uc.generate().await;

    assert_eq!(*progress.starts.lock().unwrap(), 1);
    assert_eq!(*progress.settled.lock().unwrap(), 1);
    assert_eq!(progress.completions.lock().unwrap().len(), 1);
    let values = progress.values.lock().unwrap();
    assert_eq!(values.first(), Some(&0));
    assert_eq!(values.last(), Some(&100));
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

// ==================== Reset ====================

#[tokio::test(start_paused = true)]
async fn test_reset_during_generation() {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(2)));
    let logger = Arc::new(RecordingLogger::default());
    let uc = Arc::new(use_case(generator, CharacterDraft::default()).with_logger(logger.clone()));

    let task = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });

    tokio::time::sleep(Duration::from_millis(900)).await;
    assert!(uc.snapshot().progress.value() > 0);

    uc.reset();
    let state = uc.snapshot();
    assert_eq!(state.phase, GenerationPhase::Idle);
    assert!(!state.loading);
    assert_eq!(state.progress, Progress::ZERO);
    assert!(state.result.is_empty());

    // the in-flight request still finishes, but its result is dropped
    assert_eq!(task.await.unwrap(), GenerationAttempt::Superseded);
    tokio::time::sleep(Duration::from_secs(2)).await;
    let state = uc.snapshot();
    assert_eq!(state.progress, Progress::ZERO);
    assert!(state.result.is_empty());

    assert_eq!(
        logger.events.lock().unwrap().as_slice(),
        ["generation_started", "generation_reset", "generation_superseded"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_late_failure_after_reset_is_not_logged_as_failure() {
    let generator = Arc::new(
        MockGenerator::new()
            .with_delay(Duration::from_secs(2))
            .with_image(Err(GeneratorError::Timeout)),
    );
    let logger = Arc::new(RecordingLogger::default());
    let uc = Arc::new(use_case(generator, CharacterDraft::default()).with_logger(logger.clone()));

    let task = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });
    tokio::time::sleep(Duration::from_millis(500)).await;
    uc.reset();

    assert_eq!(task.await.unwrap(), GenerationAttempt::Superseded);
    let events = logger.events.lock().unwrap();
    assert!(!events.contains(&"generation_failed"));
    assert_eq!(events.last(), Some(&"generation_superseded"));
}

#[tokio::test(start_paused = true)]
async fn test_reset_after_success_clears_result() {
    let generator = Arc::new(MockGenerator::new());
    let uc = use_case(generator, CharacterDraft::default());
    uc.generate().await;

    uc.reset();
    let state = uc.snapshot();
    assert!(state.result.is_empty());
    assert_eq!(state.phase, GenerationPhase::Idle);
    assert_eq!(state.draft, CharacterDraft::default());
}

#[tokio::test(start_paused = true)]
async fn test_new_generation_after_reset_is_not_clobbered() {
    let slow = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(3)));
    let uc = Arc::new(use_case(slow, CharacterDraft::default()));

    let stale = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });
    tokio::time::sleep(Duration::from_millis(500)).await;
    uc.reset();

    let fresh = tokio::spawn({
        let uc = Arc::clone(&uc);
        async move { uc.generate().await }
    });

    assert_eq!(stale.await.unwrap(), GenerationAttempt::Superseded);
    // the stale completion must not have touched the fresh attempt
    let state = uc.snapshot();
    assert_eq!(state.phase, GenerationPhase::Loading);
    assert!(state.progress.value() <= Progress::DEFAULT_CEILING);

    assert!(matches!(fresh.await.unwrap(), GenerationAttempt::Completed(_)));
}

// ==================== Draft ====================

#[tokio::test]
async fn test_update_and_randomize_draft() {
    let generator = Arc::new(MockGenerator::new());
    let uc = use_case(generator, CharacterDraft::default());

    uc.update_draft(|d| d.name = "Seraphina Silvermoon".to_string());
    assert_eq!(uc.snapshot().draft.name, "Seraphina Silvermoon");

    let draft = uc.randomize_draft();
    assert_eq!(uc.snapshot().draft, draft);
    assert_eq!(draft.race, "Dragonborn");
    assert_eq!(draft.class, "Ranger");
}

// ==================== Cancellation ====================

#[tokio::test(start_paused = true)]
async fn test_dropped_generate_releases_loading() {
    let generator = Arc::new(MockGenerator::new().with_delay(Duration::from_secs(5)));
    let logger = Arc::new(RecordingLogger::default());
    let uc = use_case(generator.clone(), CharacterDraft::default()).with_logger(logger.clone());

    let timed_out = tokio::time::timeout(Duration::from_secs(1), uc.generate()).await;
    assert!(timed_out.is_err());

    let state = uc.snapshot();
    assert_eq!(state.phase, GenerationPhase::Idle);
    assert!(!state.loading);
    assert_eq!(state.progress, Progress::ZERO);

    // the ticker is gone and the orphaned request's result goes nowhere
    tokio::time::sleep(Duration::from_secs(10)).await;
    let state = uc.snapshot();
    assert_eq!(state.progress, Progress::ZERO);
    assert!(state.result.is_empty());

    assert!(matches!(uc.generate().await, GenerationAttempt::Completed(_)));
    assert_eq!(generator.image_prompts.lock().unwrap().len(), 2);
    assert_eq!(
        logger.events.lock().unwrap().as_slice(),
        [
            "generation_started",
            "generation_abandoned",
            "generation_started",
            "generation_succeeded"
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_dropped_during_settle_delay_keeps_result() {
    let generator = Arc::new(MockGenerator::new());
    let progress = Arc::new(RecordingProgress::default());
    let uc = use_case(generator, CharacterDraft::default()).with_progress(progress.clone());

    // requests finish at 100 ms, settle would be at 600 ms
    let timed_out = tokio::time::timeout(Duration::from_millis(300), uc.generate()).await;
    assert!(timed_out.is_err());

    let state = uc.snapshot();
    assert_eq!(state.phase, GenerationPhase::Success);
    assert!(state.result.is_success());
    assert!(!state.loading);
    assert_eq!(*progress.settled.lock().unwrap(), 1);
}

// ==================== Reproducibility ====================

const DICE: [u32; 18] = [1, 6, 2, 5, 3, 4, 6, 6, 1, 2, 2, 3, 5, 4, 1, 6, 3, 2];

async fn roll_with_latency(delay: Duration, separate_progress_rng: bool) -> AttributeBlock {
    let generator = Arc::new(MockGenerator::new().with_delay(delay));
    let dice = Arc::new(SequenceRandom::new(DICE.to_vec()));
    let mut uc = GenerateCharacterUseCase::new(generator, dice);
    if separate_progress_rng {
        uc = uc.with_progress_rng(Arc::new(SequenceRandom::new(vec![3, 7, 1])));
    }
    let result = uc.generate().await.result().cloned().unwrap();
    *result.attributes().unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_dice_do_not_depend_on_request_latency() {
    let fast = roll_with_latency(Duration::from_millis(100), true).await;
    let slow = roll_with_latency(Duration::from_secs(2), true).await;

    assert_eq!(fast, slow);
    assert_eq!(fast.strength, 9);
    assert_eq!(fast.charisma, 11);
}

#[tokio::test(start_paused = true)]
async fn test_shared_progress_rng_shifts_dice() {
    // four ticks (410, 820, 1230, 1640 ms) consume the first four values
    let fast = roll_with_latency(Duration::from_millis(100), false).await;
    let slow = roll_with_latency(Duration::from_secs(2), false).await;

    assert_eq!(fast.strength, 9);
    assert_eq!(slow.strength, 13);
}

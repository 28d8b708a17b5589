//! Chat service layer.
//!
//! Business logic for answering messages and growing the corpus. The
//! corpus, its engine and its reply cache form one immutable snapshot that
//! is swapped whole when the corpus changes, so replies computed against an
//! old snapshot only ever land in that snapshot's cache.

use crate::cache::ReplyCache;
use crate::config::Config;
use crate::engine::ChatEngine;
use crate::error::{ChatError, ChatResult};
use crate::matching::{default_rules, RuleSet};
use crate::models::{ChatReply, QaPair};
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::QaRepository;
use crate::text::normalize;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

/// Longest accepted question, in characters.
pub const MAX_QUESTION_LENGTH: usize = 300;

/// Longest accepted answer, in characters.
pub const MAX_ANSWER_LENGTH: usize = 2000;

/// Chat service trait for business operations.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Answer a user message.
    async fn ask(&self, message: &str) -> ChatResult<ChatReply>;

    /// Validate and persist a new Q&A pair, returning the new corpus size.
    async fn add_pair(&self, question: &str, answer: &str) -> ChatResult<usize>;

    /// Rebuild the engine from the repository.
    async fn reload(&self) -> ChatResult<usize>;

    /// Number of pairs in the current engine snapshot.
    async fn pair_count(&self) -> usize;
}

/// One corpus with the engine built from it and the replies it produced.
struct Snapshot {
    corpus: Vec<QaPair>,
    engine: ChatEngine,
    cache: ReplyCache,
}

impl Snapshot {
    fn build(corpus: Vec<QaPair>, rules: RuleSet, threshold: f64, cache_ttl_secs: u64) -> Self {
        Self {
            engine: ChatEngine::new(&corpus, rules, threshold),
            cache: ReplyCache::new(cache_ttl_secs),
            corpus,
        }
    }
}

/// Default implementation of ChatService.
pub struct ChatServiceImpl {
    repository: Arc<dyn QaRepository>,
    snapshot: RwLock<Arc<Snapshot>>,
    rules: RuleSet,
    threshold: f64,
    cache_ttl_secs: u64,
    max_message_length: usize,
    metrics: MetricsTracker,
    admin_lock: Mutex<()>,
}

/// Validation helper functions.
impl ChatServiceImpl {
    /// Validate an incoming message length.
    fn validate_message(&self, message: &str) -> ChatResult<()> {
        let length = message.chars().count();
        if length > self.max_message_length {
            return Err(ChatError::MessageTooLong {
                length,
                max: self.max_message_length,
            });
        }
        Ok(())
    }

    /// Validate a trimmed Q&A pair.
    fn validate_pair(question: &str, answer: &str) -> ChatResult<()> {
        if question.is_empty() {
            return Err(ChatError::InvalidPair("Question cannot be empty".to_string()));
        }
        if answer.is_empty() {
            return Err(ChatError::InvalidPair("Answer cannot be empty".to_string()));
        }
        if question.chars().count() > MAX_QUESTION_LENGTH {
            return Err(ChatError::InvalidPair(format!(
                "Question too long (max {} characters)",
                MAX_QUESTION_LENGTH
            )));
        }
        if answer.chars().count() > MAX_ANSWER_LENGTH {
            return Err(ChatError::InvalidPair(format!(
                "Answer too long (max {} characters)",
                MAX_ANSWER_LENGTH
            )));
        }
        if normalize(question).is_empty() {
            return Err(ChatError::InvalidPair(
                "Question must contain letters or digits".to_string(),
            ));
        }
        Ok(())
    }
}

impl ChatServiceImpl {
    /// Create a chat service, loading the corpus from the repository.
    pub async fn new(
        repository: Arc<dyn QaRepository>,
        config: &Config,
        metrics: MetricsTracker,
    ) -> ChatResult<Self> {
        Self::with_rules(repository, default_rules(), config, metrics).await
    }

    /// Create a chat service with a custom rule set.
    pub async fn with_rules(
        repository: Arc<dyn QaRepository>,
        rules: RuleSet,
        config: &Config,
        metrics: MetricsTracker,
    ) -> ChatResult<Self> {
        let corpus = repository.list().await?;
        tracing::info!(
            pairs = corpus.len(),
            rules = rules.len(),
            threshold = config.similarity_threshold,
            "Chat engine ready"
        );

        let snapshot = Snapshot::build(
            corpus,
            rules.clone(),
            config.similarity_threshold,
            config.reply_cache_ttl_secs,
        );

        Ok(Self {
            repository,
            snapshot: RwLock::new(Arc::new(snapshot)),
            rules,
            threshold: config.similarity_threshold,
            cache_ttl_secs: config.reply_cache_ttl_secs,
            max_message_length: config.max_message_length,
            metrics,
            admin_lock: Mutex::new(()),
        })
    }

    /// Current snapshot.
    fn snapshot(&self) -> Arc<Snapshot> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the snapshot; its fresh cache starts empty.
    fn install(&self, corpus: Vec<QaPair>) {
        let snapshot = Arc::new(Snapshot::build(
            corpus,
            self.rules.clone(),
            self.threshold,
            self.cache_ttl_secs,
        ));
        match self.snapshot.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Reply cache of the current snapshot.
    pub fn cache(&self) -> ReplyCache {
        self.snapshot().cache.clone()
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn ask(&self, message: &str) -> ChatResult<ChatReply> {
        if let Err(e) = self.validate_message(message) {
            tracing::warn!("Rejected message: {}", e);
            self.metrics.track_rejected_message();
            return Err(e);
        }

        let timer = Timer::new("chat_ask");
        let normalized = normalize(message);
        let snapshot = self.snapshot();

        let cached = if normalized.is_empty() {
            None
        } else {
            let hit = snapshot.cache.get(&normalized);
            if snapshot.cache.is_enabled() {
                self.metrics.track_cache_access(hit.is_some());
            }
            hit
        };

        let reply = match cached {
            Some(reply) => reply,
            None => {
                let reply = snapshot.engine.respond_normalized(&normalized);
                if !normalized.is_empty() {
                    snapshot.cache.insert(normalized, reply.clone());
                }
                reply
            }
        };

        self.metrics
            .track_reply(reply.source, reply.confidence, timer.finish());
        Ok(reply)
    }

    async fn add_pair(&self, question: &str, answer: &str) -> ChatResult<usize> {
        let question = question.trim();
        let answer = answer.trim();
        Self::validate_pair(question, answer)?;

        // Duplicate check and append must not interleave with another admin write
        let _guard = self.admin_lock.lock().await;

        let current = self.snapshot();
        if current.engine.has_question(question) {
            tracing::warn!(question = %question, "Duplicate question rejected");
            return Err(ChatError::DuplicateQuestion(question.to_string()));
        }

        let pair = QaPair::new(question, answer);
        let total = self.repository.append(pair.clone()).await?;

        // Nothing fallible runs after the write
        let mut corpus = current.corpus.clone();
        corpus.push(pair);
        self.install(corpus);
        self.metrics.track_pair_added();

        tracing::info!(question = %question, total_pairs = total, "Q&A pair added");
        Ok(total)
    }

    async fn reload(&self) -> ChatResult<usize> {
        let _guard = self.admin_lock.lock().await;
        let corpus = self.repository.list().await?;
        let pairs = corpus.len();
        self.install(corpus);
        tracing::info!(pairs = pairs, "Chat engine reloaded");
        Ok(pairs)
    }

    async fn pair_count(&self) -> usize {
        self.snapshot().corpus.len()
    }
}

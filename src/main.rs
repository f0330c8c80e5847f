use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use tedtopics::config::Config;
use tedtopics::corpus::overview;
use tedtopics::corpus::stats::{self, DEFAULT_SPLIT_THRESHOLD};
use tedtopics::corpus::talk::{load_json, save_json};
use tedtopics::corpus::{Corpus, TokenizedCorpus};
use tedtopics::output::terminal;
use tedtopics::recommend::{Recommender, TopicMatrix};
use tedtopics::tokenizer::clean::clean_transcript;
use tedtopics::tokenizer::Tokenizer;
use tedtopics::topics::labels::TopicLabels;
use tedtopics::topics::model::TopicModel;
use tedtopics::topics::ranking::{cooccurrence, rank_documents, topic_histogram, TopicRank};

/// tedtopics: explore an LDA topic model of TED Talk transcripts.
///
/// Cleans and tokenizes transcripts for topic modeling, shows token and
/// topic statistics, and recommends talks by Jensen-Shannon distance
/// between topic distributions.
#[derive(Parser)]
#[command(name = "tedtopics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a transcript after the text cleanup stages
    Clean(TextInput),

    /// Print the lemmatized token sequence of a transcript
    Tokenize(TextInput),

    /// Tokenize every transcript in the corpus and cache the tokens
    BuildTokens,

    /// Show ranked token counts
    Tokens {
        /// Count documents containing each token instead of occurrences
        #[arg(long, conflicts_with = "year")]
        by_documents: bool,

        /// Only count talks recorded in this year
        #[arg(long)]
        year: Option<i32>,

        /// First rank to show (1-based)
        #[arg(long, default_value = "1")]
        from: usize,

        /// Last rank to show (inclusive)
        #[arg(long, default_value = "50")]
        to: usize,
    },

    /// Show corpus-level engagement, linguistic and temporal summaries
    Stats {
        /// Only show one view (default: all three)
        #[arg(long, value_enum)]
        view: Option<StatsView>,
    },

    /// Show topic labels, top words, and dominant-topic statistics
    Topics {
        /// Words to show per topic (default: 15)
        #[arg(long, default_value = "15")]
        top_words: usize,
    },

    /// Show one talk's topic distribution, summary and tags
    TopicDistribution {
        /// Talk index, starting at 1
        index: usize,
    },

    /// Recommend the most similar and most different talks
    Recommend {
        /// Exact talk title to get recommendations for
        #[arg(long, conflicts_with = "random", required_unless_present = "random")]
        title: Option<String>,

        /// Pick a talk at random ("surprise me")
        #[arg(long)]
        random: bool,

        /// Talks per list (default: TEDTOPICS_NUM_RECS or 5)
        #[arg(short, long)]
        k: Option<usize>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StatsView {
    Engagement,
    Linguistic,
    Temporal,
}

/// Transcript text, given inline, as a file, or on stdin.
#[derive(Args)]
struct TextInput {
    /// Transcript text
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// File containing the transcript (reads stdin when neither is given)
    file: Option<PathBuf>,
}

impl TextInput {
    fn read(self) -> Result<String> {
        match (self.text, self.file) {
            (Some(text), _) => Ok(text),
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display())),
            (None, None) => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read transcript from stdin")?;
                Ok(text)
            }
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tedtopics=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clean(input) => {
            let text = input.read()?;
            println!("{}", clean_transcript(&text));
        }

        Commands::Tokenize(input) => {
            let text = input.read()?;
            let tokens = Tokenizer::default().tokenize_to_vec(&text);
            terminal::display_tokens(&tokens);
        }

        Commands::BuildTokens => {
            let config = Config::load()?;
            config.require_corpus()?;
            let corpus = Corpus::load(&config.corpus_path)?;

            println!("Tokenizing {} transcripts...", corpus.len());
            let tokenized =
                tedtopics::pipeline::build_tokens::run(&Tokenizer::default(), &corpus, true);

            save_json(&config.tokens_path, &tokenized)?;
            println!(
                "{} Token cache written to {}",
                "Done.".bold(),
                config.tokens_path.display()
            );
        }

        Commands::Tokens {
            by_documents,
            year,
            from,
            to,
        } => {
            let config = Config::load()?;
            config.require_tokens()?;
            let tokenized: TokenizedCorpus = load_json(&config.tokens_path)?;

            if let Some(year) = year {
                config.require_corpus()?;
                let corpus = Corpus::load(&config.corpus_path)?;
                let mut by_year = tokenized.frequencies_by_year(&corpus);
                let Some(freqs) = by_year.remove(&year) else {
                    let years: Vec<String> = by_year.keys().map(i32::to_string).collect();
                    anyhow::bail!(
                        "Sorry, {year} not available. Years available: {}",
                        years.join(", ")
                    );
                };
                let ranked = stats::ranked(&freqs, from, to);
                terminal::display_ranked_tokens(
                    &format!("Top {from} to {to} tokens in talks recorded in {year}"),
                    &ranked,
                    from,
                );
                return Ok(());
            }

            let (freqs, heading) = if by_documents {
                (
                    tokenized.document_frequencies(),
                    format!("Top {from} to {to} tokens appearing in the most documents"),
                )
            } else {
                (
                    tokenized.corpus_frequencies(),
                    format!("Top {from} to {to} tokens in corpus"),
                )
            };

            let (rare, common) = stats::split_by_threshold(&freqs, DEFAULT_SPLIT_THRESHOLD);
            println!(
                "{} distinct tokens: {} below {} and {} at or above",
                freqs.len(),
                rare.len(),
                DEFAULT_SPLIT_THRESHOLD,
                common.len()
            );

            let ranked = stats::ranked(&freqs, from, to);
            terminal::display_ranked_tokens(&heading, &ranked, from);
        }

        Commands::Stats { view } => {
            let config = Config::load()?;
            config.require_corpus()?;
            let corpus = Corpus::load(&config.corpus_path)?;
            let shows = |v: StatsView| view.is_none() || view == Some(v);

            if shows(StatsView::Engagement) {
                terminal::display_engagement(&overview::engagement(&corpus));
            }
            if shows(StatsView::Linguistic) {
                let tokenized: Option<TokenizedCorpus> = if config.tokens_path.exists() {
                    Some(load_json(&config.tokens_path)?)
                } else {
                    info!(
                        path = %config.tokens_path.display(),
                        "No token cache; skipping distinct token counts"
                    );
                    None
                };
                terminal::display_linguistic(&overview::linguistic(&corpus, tokenized.as_ref()));
            }
            if shows(StatsView::Temporal) {
                terminal::display_temporal(&overview::temporal(&corpus));
            }
        }

        Commands::Topics { top_words } => {
            let config = Config::load()?;
            config.require_model()?;
            config.require_topics()?;
            let labels = TopicLabels::default();

            let model: TopicModel = load_json(&config.model_path)?;
            model.validate()?;
            terminal::display_top_words(&model.top_words(top_words), &labels);

            let matrix: TopicMatrix = load_json(&config.topics_path)?;
            let rankings = rank_documents(&matrix);
            info!(documents = rankings.len(), topics = matrix.topics(), "Ranked topics");

            let histograms: Vec<(TopicRank, Vec<usize>)> = TopicRank::ALL
                .iter()
                .map(|&rank| (rank, topic_histogram(&rankings, rank, matrix.topics())))
                .collect();
            terminal::display_topic_histogram(&histograms, &labels, rankings.len());

            for (a, b) in [
                (TopicRank::Dominant, TopicRank::Secondary),
                (TopicRank::Dominant, TopicRank::Tertiary),
                (TopicRank::Secondary, TopicRank::Tertiary),
            ] {
                let table = cooccurrence(&rankings, a, b, matrix.topics());
                terminal::display_cooccurrence(&table, a, b, &labels);
            }
        }

        Commands::TopicDistribution { index } => {
            let config = Config::load()?;
            let (corpus, recommender) = load_recommender(&config)?;
            let row = index
                .checked_sub(1)
                .and_then(|i| recommender.matrix().row(i).map(|r| (i, r)));
            let Some((i, distribution)) = row else {
                anyhow::bail!("Talk index must be between 1 and {}", recommender.len());
            };
            terminal::display_topic_distribution(i, &corpus, distribution, &TopicLabels::default());
        }

        Commands::Recommend { title, random, k } => {
            let config = Config::load()?;
            let (corpus, recommender) = load_recommender(&config)?;
            let k = k.unwrap_or(config.num_recs);
            let labels = TopicLabels::default();

            let rec = if random {
                recommender.recommend_random(&mut rand::rng(), k)?
            } else {
                let title = title.unwrap_or_default();
                match recommender.recommend_by_title(&title, k)? {
                    Some(rec) => rec,
                    None => {
                        println!("No talk found.");
                        return Ok(());
                    }
                }
            };

            terminal::display_recommendation(&rec, &corpus, &labels);
        }
    }

    Ok(())
}

/// Load the corpus and topic matrix and pair them row-for-row.
fn load_recommender(config: &Config) -> Result<(Corpus, Recommender)> {
    config.require_corpus()?;
    config.require_topics()?;

    let corpus = Corpus::load(&config.corpus_path)?;
    let matrix: TopicMatrix = load_json(&config.topics_path)
        .with_context(|| format!("invalid topic matrix in {}", config.topics_path.display()))?;
    let recommender = Recommender::new(corpus.titles(), matrix)?;

    Ok((corpus, recommender))
}

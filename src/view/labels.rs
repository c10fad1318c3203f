use crate::models::ModelInfo;

/// Curated display text for the models described in the research report
struct ModelOverride {
    key: &'static str,
    label: &'static str,
    description: &'static str,
}

const MODEL_OVERRIDES: &[ModelOverride] = &[
    ModelOverride {
        key: "kyle",
        label: "All Features (TF-IDF + Genre + Director + Cast + Ratings)",
        description: "Combines plot (TF-IDF), genres, director, cast, and ratings into a single feature vector. Uses KNN with cosine similarity. This is the main model described in our research.",
    },
    ModelOverride {
        key: "eugene",
        label: "Overview + Director (SBERT + TFIDF)",
        description: "Uses SBERT embeddings for plot and TF-IDF+SVD for director. Explores the effect of deep semantic and director features.",
    },
    ModelOverride {
        key: "sbert",
        label: "Overview + Genre (SBERT)",
        description: "Uses SBERT embeddings for plot and filters by genre overlap. Demonstrates the effect of using only plot and genre.",
    },
    ModelOverride {
        key: "patrick",
        label: "Overview + Genre (TF-IDF)",
        description: "Uses TF-IDF on plot and one-hot encoded genres. Shows the effectiveness of traditional NLP techniques without deep learning.",
    },
];

fn lookup(key: &str) -> Option<&'static ModelOverride> {
    MODEL_OVERRIDES.iter().find(|entry| entry.key == key)
}

/// Label shown for a model: the curated one for known keys, else the server name
pub fn model_label<'a>(key: &str, info: &'a ModelInfo) -> &'a str {
    match lookup(key) {
        Some(entry) => entry.label,
        None => &info.name,
    }
}

/// Description shown for a model: the curated one for known keys, else the server text
pub fn model_description<'a>(key: &str, info: &'a ModelInfo) -> &'a str {
    match lookup(key) {
        Some(entry) => entry.description,
        None => &info.description,
    }
}

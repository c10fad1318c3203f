use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::models::{ModelCatalog, Movie, MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS};

use super::labels::{model_description, model_label};
use super::state::{ViewError, ViewState};

const STYLE: &str = "body{font-family:sans-serif;background:#23284a;color:#fff;max-width:72rem;margin:0 auto;padding:1rem}\
section,.panel{background:rgba(255,255,255,.1);border-radius:1rem;padding:1.5rem;margin-bottom:1.5rem}\
.columns{display:flex;gap:2rem}.columns>.panel{flex:1}\
select,input,button{width:100%;padding:.6rem;margin:.4rem 0 1rem}\
.error{background:rgba(248,113,113,.2);color:#fecaca;padding:.75rem;text-align:center}\
.card{background:rgba(255,255,255,.1);border-radius:1rem;padding:1rem;margin-bottom:1rem}\
.rank{float:right;background:#6366f1;border-radius:1rem;padding:.1rem .6rem}\
footer{text-align:center;opacity:.4}";

/// Formats a similarity score in [0, 1] as a percentage with one decimal
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.1}%", similarity * 100.0)
}

/// Renders the whole page for `state`; `year` goes in the footer
pub fn render_page(state: &ViewState, year: i32) -> String {
    let page = view! { <Page state=state.clone() year=year/> };
    format!("<!DOCTYPE html>{}", page.to_html())
}

#[component]
fn Page(state: ViewState, year: i32) -> impl IntoView {
    let loading = state.loading;
    let enabled = state.action_enabled();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <title>"Movie Recommender"</title>
                // poll until the in-flight request settles
                {loading.then(|| view! { <meta http-equiv="refresh" content="1"/> })}
                <style inner_html=STYLE></style>
            </head>
            <body>
                <h1>"Movie Recommender"</h1>
                <About/>
                <div class="columns">
                    <div class="panel controls">
                        <ModelSelector
                            models=state.models.clone()
                            selected=state.selected_model.clone()
                        />
                        <MovieSelector
                            movies=state.movies.clone()
                            selected=state.selected_movie.clone()
                        />
                        <CountSlider count=state.count.get()/>
                        <ActionButton loading=loading enabled=enabled/>
                        <ErrorBanner error=state.error/>
                    </div>
                    <div class="panel results">
                        <Results recommendations=state.recommendations.clone()/>
                    </div>
                </div>
                <footer>{format!("© {} Movie Recommender", year)}</footer>
            </body>
        </html>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="about">
            <h2>"About This Project"</h2>
            <p>
                <b>"Movie Recommendation System"</b>
                " is a research project by Kyle Carbonell, Eugene Cho, Patrick Yao, and Brayan Torres Vega (2025). \
                 We use the IMDb Top 1000 dataset and explore different content-based recommendation models \
                 using only movie features (no user data)."
            </p>
            <ul>
                <li>"All models use KNN with cosine similarity to find similar movies."</li>
                <li>"Features include: plot (overview), genres, director, cast, and ratings."</li>
                <li>"Each model in the dropdown represents a different research experiment or feature combination from our report."</li>
            </ul>
        </section>
    }
}

#[component]
fn ModelSelector(models: ModelCatalog, selected: String) -> impl IntoView {
    let description = models
        .get(&selected)
        .map(|info| model_description(&selected, info).to_string());

    let options = models
        .iter()
        .map(|(key, info)| {
            let text = format!("{} by {}", model_label(key, info), info.author);
            view! { <option value=key.clone() selected={*key == selected}>{text}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <form method="post" action="/select/model">
            <label for="model">"Select Model:"</label>
            <select id="model" name="model" onchange="this.form.submit()">
                {options}
            </select>
            <noscript><button type="submit">"Apply"</button></noscript>
        </form>
        {description.map(|text| view! { <p class="description"><i>{text}</i></p> })}
    }
}

#[component]
fn MovieSelector(movies: Vec<String>, selected: String) -> impl IntoView {
    let placeholder = selected.is_empty();
    let options = movies
        .into_iter()
        .map(|title| {
            let is_selected = title == selected;
            view! { <option value=title.clone() selected=is_selected>{title.clone()}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <form method="post" action="/select/movie">
            <label for="movie">"Select Movie:"</label>
            <select id="movie" name="movie" onchange="this.form.submit()">
                <option value="" selected=placeholder>"Choose a movie..."</option>
                {options}
            </select>
            <noscript><button type="submit">"Apply"</button></noscript>
        </form>
    }
}

#[component]
fn CountSlider(count: u8) -> impl IntoView {
    view! {
        <form method="post" action="/select/count">
            <label for="count">"Number of Recommendations: "<b>{count.to_string()}</b></label>
            <input
                type="range"
                id="count"
                name="count"
                min=MIN_RECOMMENDATIONS.to_string()
                max=MAX_RECOMMENDATIONS.to_string()
                value=count.to_string()
                onchange="this.form.submit()"
            />
            <noscript><button type="submit">"Apply"</button></noscript>
        </form>
    }
}

#[component]
fn ActionButton(loading: bool, enabled: bool) -> impl IntoView {
    let label = if loading {
        "Getting Recommendations..."
    } else {
        "Get Recommendations"
    };

    view! {
        <form method="post" action="/recommend">
            <button type="submit" id="recommend" disabled={!enabled}>{label}</button>
        </form>
    }
}

#[component]
fn ErrorBanner(error: Option<ViewError>) -> impl IntoView {
    error.map(|error| view! { <div class="error" role="alert">{error.to_string()}</div> })
}

#[component]
fn Results(recommendations: Vec<Movie>) -> impl IntoView {
    (!recommendations.is_empty()).then(|| {
        let cards = recommendations
            .into_iter()
            .enumerate()
            .map(|(index, movie)| view! { <MovieCard rank={index + 1} movie=movie/> })
            .collect::<Vec<_>>();

        view! {
            <h2>"Recommended Movies"</h2>
            {cards}
        }
    })
}

#[component]
fn MovieCard(rank: usize, movie: Movie) -> impl IntoView {
    view! {
        <div class="card">
            <span class="rank">{format!("#{}", rank)}</span>
            <h3>{movie.title}</h3>
            <p class="genre"><i>{movie.genre}</i></p>
            <p>
                <span class="rating">{format!("★ {}", movie.rating)}</span>
                <span class="similarity">
                    {format!("Similarity: {}", format_similarity(movie.similarity))}
                </span>
            </p>
            <p class="overview">{movie.overview}</p>
        </div>
    }
}

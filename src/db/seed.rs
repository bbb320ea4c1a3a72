//! Fixture catalog entries.
//!
//! A fresh deployment starts with an empty movies table; these fixtures
//! give it a small browsable catalog so the read endpoints work out of the
//! box. Seeding is skipped when the catalog already has rows.

use super::store::Store;
use crate::types::{Director, Genre, Movie, Result};
use uuid::Uuid;

/// Seeds the fixture movies into an empty catalog.
///
/// Returns the number of movies inserted (zero when the catalog was not
/// empty).
pub async fn seed_catalog(store: &Store) -> Result<usize> {
    if store.count_movies().await? > 0 {
        return Ok(0);
    }

    let movies = fixture_movies();
    let count = movies.len();

    for movie in &movies {
        store.create_movie(movie).await?;
    }

    tracing::info!(count, "seeded movie catalog");

    Ok(count)
}

fn fixture_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: Uuid::new_v4().to_string(),
            title: "Harry Potter and the Sorcerer's Stone".to_string(),
            description: "Based on the wildly popular J.K. Rowling's book about a young boy \
                          who on his eleventh birthday discovers, he is the orphaned boy of \
                          two powerful wizards and has unique magical powers."
                .to_string(),
            genre: Genre {
                name: "Fantasy".to_string(),
                description: "Fantasy is a genre of literature that features magical and \
                              supernatural elements that are not real"
                    .to_string(),
            },
            director: Director {
                name: "Chris Columbus".to_string(),
                bio: "Born in Pennsylvania and raised in Ohio, Chris Columbus was first \
                      inspired to make movies after seeing The Godfather at age 15. After \
                      enrolling at NYU film school, he sold his first screenplay while a \
                      sophomore there. His directing career was launched with Adventures \
                      in Babysitting, and he is best known as the director of the runaway \
                      hit Home Alone, its sequel Home Alone 2, and Mrs. Doubtfire."
                    .to_string(),
                birth: Some(1958),
            },
            image_url: Some(
                "https://www.amazon.com/Harry-Potter-Sorcerers-Daniel-Radcliffe/dp/B0011AQLZQ"
                    .to_string(),
            ),
            featured: false,
        },
        Movie {
            id: Uuid::new_v4().to_string(),
            title: "Lord of the Rings".to_string(),
            description: "In the first part, The Lord of the Rings, a shy young hobbit named \
                          Frodo Baggins inherits a simple gold ring that holds the secret to \
                          the survival--or enslavement--of the entire world."
                .to_string(),
            genre: Genre {
                name: "Adventure".to_string(),
                description: "Adventure stories are a genre that involve protagonists going \
                              on epic journeys."
                    .to_string(),
            },
            director: Director {
                name: "Peter Jackson".to_string(),
                bio: "Sir Peter Jackson made history with The Lord of the Rings trilogy, \
                      becoming the first person to direct three major feature films \
                      simultaneously. The Fellowship of the Ring, The Two Towers and The \
                      Return of the King collected a slew of awards from around the globe, \
                      with The Return of the King receiving his most impressive collection, \
                      including three Academy Awards."
                    .to_string(),
                birth: Some(1961),
            },
            image_url: Some(
                "https://www.amazon.com/Lord-Rings-Fellowship-Ring/dp/B000YMH4CG".to_string(),
            ),
            featured: false,
        },
        Movie {
            id: Uuid::new_v4().to_string(),
            title: "Twilight".to_string(),
            description: "When Bella Swan moves to a small town in the Pacific Northwest, she \
                          falls in love with Edward Cullen, a mysterious classmate who reveals \
                          himself to be a 108-year-old vampire."
                .to_string(),
            genre: Genre {
                name: "Romance".to_string(),
                description: "The romance genre is a type of storytelling that explores love \
                              and romantic relationships between characters."
                    .to_string(),
            },
            director: Director {
                name: "Catherine Hardwicke".to_string(),
                bio: "Hardwicke's first film as a director was the Sundance winner Thirteen, \
                      which explored the transition into teenage years. She directed Lords of \
                      Dogtown before she became best known as the director of Twilight, which \
                      launched the blockbuster franchise and has since earned over three \
                      billion dollars."
                    .to_string(),
                birth: Some(1955),
            },
            image_url: Some(
                "https://www.amazon.com/Twilight-Kristen-Stewart/dp/B001T5D6LK".to_string(),
            ),
            featured: false,
        },
    ]
}

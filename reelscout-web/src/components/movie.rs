//! Movie components - result cards and the result grid

use reelscout_search::MovieSummary;

use super::escape;
use super::layout::grid;

/// Renders one result card: poster, title and release year.
pub fn movie_card(movie: &MovieSummary) -> String {
    let title = escape(&movie.title);

    format!(
        r#"<div class="bg-slate-100 rounded-md" data-imdb-id="{id}">
            <div class="h-[50vh]">
                <img class="w-full h-full object-cover object-top rounded-t-md"
                     src="{poster}" alt="{title}" loading="lazy" />
            </div>
            <div class="p-3 text-slate-700">
                <p>Movie Name: <span class="text-slate-900 font-medium">{title}</span></p>
                <p>Release Year: <span class="text-slate-900 font-medium">{year}</span></p>
            </div>
        </div>"#,
        id = escape(&movie.imdb_id),
        poster = escape(movie.poster_src()),
        year = escape(&movie.year),
    )
}

/// Renders the result grid in provider order. An empty slice renders an
/// empty grid.
pub fn movie_grid(movies: &[MovieSummary]) -> String {
    let cards: String = movies.iter().map(movie_card).collect();

    format!(
        r#"<div class="px-4 md:px-16 my-12">{}</div>"#,
        grid("grid-cols-1 sm:grid-cols-2 lg:grid-cols-4", &cards)
    )
}

#[cfg(test)]
mod tests {
    use reelscout_search::POSTER_PLACEHOLDER_URL;

    use super::*;

    fn movie(id: &str, title: &str, poster: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2009".to_string(),
            poster: poster.to_string(),
        }
    }

    #[test]
    fn test_card_uses_placeholder_for_sentinel() {
        let html = movie_card(&movie("tt0499549", "Avatar", "N/A"));

        assert!(html.contains(&format!(r#"src="{}""#, escape(POSTER_PLACEHOLDER_URL))));
        assert!(!html.contains(r#"src="N/A""#));
        assert!(html.contains("Movie Name: <span"));
        assert!(html.contains(">Avatar</span>"));
        assert!(html.contains(">2009</span>"));
    }

    #[test]
    fn test_card_escapes_provider_text() {
        let html = movie_card(&movie("tt1", "<script>alert(1)</script>", "N/A"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_grid_preserves_order() {
        let movies = vec![
            movie("tt3", "Heat", "https://img/3.jpg"),
            movie("tt1", "Alien", "N/A"),
            movie("tt2", "Aliens", "N/A"),
        ];
        let html = movie_grid(&movies);

        let heat = html.find("tt3").unwrap();
        let alien = html.find(r#""tt1""#).unwrap();
        let aliens = html.find("tt2").unwrap();
        assert!(heat < alien && alien < aliens);
        assert!(html.contains(r#"src="https://img/3.jpg""#));
    }

    #[test]
    fn test_empty_grid() {
        let html = movie_grid(&[]);
        assert!(html.contains("grid"));
        assert!(!html.contains("data-imdb-id"));
    }
}

use crate::types::{AppError, Director, Genre, Movie, Result};
use chrono::{NaiveDate, Utc};
use libsql::{Builder, Connection, Database};

/// libsql-backed store for users, movies, and favorites.
///
/// All lookups are single point-reads; the store never runs multi-step
/// transactions on behalf of the auth subsystem.
pub struct Store {
    db: Database,
}

impl Store {
    /// Creates an ephemeral in-memory store.
    pub async fn new_memory() -> Result<Self> {
        let db = Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open in-memory database: {}", e)))?;

        let store = Self { db };
        store.initialize_schema().await?;

        Ok(store)
    }

    /// Creates a store backed by a local SQLite file.
    pub async fn new_local(path: &str) -> Result<Self> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        let store = Self { db };
        store.initialize_schema().await?;

        Ok(store)
    }

    /// Creates a store backed by a remote Turso database.
    #[cfg(feature = "turso")]
    pub async fn new_remote(url: String, auth_token: String) -> Result<Self> {
        let db = Builder::new_remote(url, auth_token)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Turso: {}", e)))?;

        let store = Self { db };
        store.initialize_schema().await?;

        Ok(store)
    }

    pub fn connection(&self) -> Result<Connection> {
        self.db
            .connect()
            .map_err(|e| AppError::Database(format!("Failed to get connection: {}", e)))
    }

    async fn initialize_schema(&self) -> Result<()> {
        let conn = self.connection()?;

        // Users table. The UNIQUE constraint on username is the
        // authoritative duplicate guard; application-level pre-checks only
        // exist for a friendlier error message.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                email TEXT NOT NULL,
                birthday TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

        // Movies table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS movies (
                id TEXT PRIMARY KEY,
                title TEXT UNIQUE NOT NULL,
                description TEXT NOT NULL,
                genre_name TEXT NOT NULL,
                genre_description TEXT NOT NULL,
                director_name TEXT NOT NULL,
                director_bio TEXT NOT NULL,
                director_birth INTEGER,
                image_url TEXT,
                featured INTEGER NOT NULL DEFAULT 0
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create movies table: {}", e)))?;

        // Favorites join table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS favorites (
                user_id TEXT NOT NULL,
                movie_id TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (user_id, movie_id),
                FOREIGN KEY (user_id) REFERENCES users(id),
                FOREIGN KEY (movie_id) REFERENCES movies(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create favorites table: {}", e)))?;

        Ok(())
    }

    // ============= User operations =============

    pub async fn create_user(
        &self,
        id: &str,
        username: &str,
        password_hash: &str,
        email: &str,
        birthday: Option<NaiveDate>,
    ) -> Result<()> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO users (id, username, password_hash, email, birthday, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                id,
                username,
                password_hash,
                email,
                birthday.map(|d| d.to_string()),
                now,
                now,
            ),
        )
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") {
                AppError::Conflict("Username already taken".to_string())
            } else {
                AppError::Database(format!("Failed to create user: {}", msg))
            }
        })?;

        Ok(())
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, username, password_hash, email, birthday, created_at, updated_at
                 FROM users WHERE username = ?",
                [username],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(user_from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, username, password_hash, email, birthday, created_at, updated_at
                 FROM users WHERE id = ?",
                [id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(user_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Replaces the mutable profile fields of a user wholesale. The caller
    /// merges old and new values; a password change arrives here already
    /// re-hashed.
    pub async fn update_user(
        &self,
        id: &str,
        username: &str,
        password_hash: &str,
        email: &str,
        birthday: Option<NaiveDate>,
    ) -> Result<()> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "UPDATE users SET username = ?, password_hash = ?, email = ?, birthday = ?, updated_at = ?
             WHERE id = ?",
            (
                username,
                password_hash,
                email,
                birthday.map(|d| d.to_string()),
                now,
                id,
            ),
        )
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") {
                AppError::Conflict("Username already taken".to_string())
            } else {
                AppError::Database(format!("Failed to update user: {}", msg))
            }
        })?;

        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let conn = self.connection()?;

        conn.execute("DELETE FROM favorites WHERE user_id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete favorites: {}", e)))?;

        conn.execute("DELETE FROM users WHERE id = ?", [id])
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete user: {}", e)))?;

        Ok(())
    }

    // ============= Favorites operations =============

    /// Adds a movie to a user's favorites. Adding an existing favorite is
    /// not an error.
    pub async fn add_favorite(&self, user_id: &str, movie_id: &str) -> Result<()> {
        let conn = self.connection()?;
        let now = Utc::now().timestamp();

        conn.execute(
            "INSERT OR IGNORE INTO favorites (user_id, movie_id, created_at) VALUES (?, ?, ?)",
            (user_id, movie_id, now),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to add favorite: {}", e)))?;

        Ok(())
    }

    /// Removes a movie from a user's favorites. Removing a movie that was
    /// never a favorite is a no-op.
    pub async fn remove_favorite(&self, user_id: &str, movie_id: &str) -> Result<()> {
        let conn = self.connection()?;

        conn.execute(
            "DELETE FROM favorites WHERE user_id = ? AND movie_id = ?",
            (user_id, movie_id),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to remove favorite: {}", e)))?;

        Ok(())
    }

    pub async fn get_favorites(&self, user_id: &str) -> Result<Vec<String>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT movie_id FROM favorites WHERE user_id = ? ORDER BY created_at ASC",
                [user_id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query favorites: {}", e)))?;

        let mut favorites = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            favorites.push(row.get(0).map_err(|e| AppError::Database(e.to_string()))?);
        }

        Ok(favorites)
    }

    // ============= Movie operations =============

    pub async fn create_movie(&self, movie: &Movie) -> Result<()> {
        let conn = self.connection()?;

        conn.execute(
            "INSERT INTO movies (id, title, description, genre_name, genre_description,
                                 director_name, director_bio, director_birth, image_url, featured)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            libsql::params![
                movie.id.as_str(),
                movie.title.as_str(),
                movie.description.as_str(),
                movie.genre.name.as_str(),
                movie.genre.description.as_str(),
                movie.director.name.as_str(),
                movie.director.bio.as_str(),
                movie.director.birth.map(i64::from),
                movie.image_url.as_deref(),
                movie.featured as i64,
            ],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create movie: {}", e)))?;

        Ok(())
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, title, description, genre_name, genre_description,
                        director_name, director_bio, director_birth, image_url, featured
                 FROM movies ORDER BY title ASC",
                (),
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query movies: {}", e)))?;

        let mut movies = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            movies.push(movie_from_row(&row)?);
        }

        Ok(movies)
    }

    pub async fn get_movie_by_title(&self, title: &str) -> Result<Option<Movie>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, title, description, genre_name, genre_description,
                        director_name, director_bio, director_birth, image_url, featured
                 FROM movies WHERE title = ?",
                [title],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query movie: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(movie_from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_movie_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT id, title, description, genre_name, genre_description,
                        director_name, director_bio, director_birth, image_url, featured
                 FROM movies WHERE id = ?",
                [id],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query movie: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(movie_from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_genre(&self, name: &str) -> Result<Option<Genre>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT genre_name, genre_description FROM movies WHERE genre_name = ? LIMIT 1",
                [name],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query genre: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(Genre {
                name: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                description: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
            })),
            None => Ok(None),
        }
    }

    pub async fn get_director(&self, name: &str) -> Result<Option<Director>> {
        let conn = self.connection()?;

        let mut rows = conn
            .query(
                "SELECT director_name, director_bio, director_birth
                 FROM movies WHERE director_name = ? LIMIT 1",
                [name],
            )
            .await
            .map_err(|e| AppError::Database(format!("Failed to query director: {}", e)))?;

        match rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            Some(row) => Ok(Some(Director {
                name: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
                bio: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
                birth: row
                    .get::<Option<i64>>(2)
                    .map_err(|e| AppError::Database(e.to_string()))?
                    .map(|y| y as i32),
            })),
            None => Ok(None),
        }
    }

    pub async fn count_movies(&self) -> Result<i64> {
        let conn = self.connection()?;

        let mut rows = conn
            .query("SELECT COUNT(*) FROM movies", ())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count movies: {}", e)))?;

        let row = rows
            .next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .ok_or_else(|| AppError::Database("COUNT returned no rows".to_string()))?;

        row.get(0).map_err(|e| AppError::Database(e.to_string()))
    }
}

fn user_from_row(row: &libsql::Row) -> Result<User> {
    let birthday: Option<String> = row.get(4).map_err(|e| AppError::Database(e.to_string()))?;

    Ok(User {
        id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
        username: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
        password_hash: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
        email: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
        birthday: birthday.and_then(|s| s.parse().ok()),
        created_at: row.get(5).map_err(|e| AppError::Database(e.to_string()))?,
        updated_at: row.get(6).map_err(|e| AppError::Database(e.to_string()))?,
    })
}

fn movie_from_row(row: &libsql::Row) -> Result<Movie> {
    Ok(Movie {
        id: row.get(0).map_err(|e| AppError::Database(e.to_string()))?,
        title: row.get(1).map_err(|e| AppError::Database(e.to_string()))?,
        description: row.get(2).map_err(|e| AppError::Database(e.to_string()))?,
        genre: Genre {
            name: row.get(3).map_err(|e| AppError::Database(e.to_string()))?,
            description: row.get(4).map_err(|e| AppError::Database(e.to_string()))?,
        },
        director: Director {
            name: row.get(5).map_err(|e| AppError::Database(e.to_string()))?,
            bio: row.get(6).map_err(|e| AppError::Database(e.to_string()))?,
            birth: row
                .get::<Option<i64>>(7)
                .map_err(|e| AppError::Database(e.to_string()))?
                .map(|y| y as i32),
        },
        image_url: row.get(8).map_err(|e| AppError::Database(e.to_string()))?,
        featured: row
            .get::<i64>(9)
            .map_err(|e| AppError::Database(e.to_string()))?
            != 0,
    })
}

/// A stored user record. The `password_hash` field never leaves the server;
/// API responses use [`crate::types::UserProfile`] instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    pub created_at: i64,
    pub updated_at: i64,
}

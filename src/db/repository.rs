//! Database repository for collection operations.
//!
//! Membership and id arrays are stored as JSON text columns; the repository
//! enforces set semantics (no duplicates on add, no-op remove-if-absent)
//! inside transactions so a row never holds a duplicate id.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::masks;
use crate::models::{
    CreateGuildRequest, CreatePostRequest, CreateProfileRequest, Guild, Inventory,
    MembershipState, Party, Post, Profile, UpdateProfileRequest,
};

/// Maximum number of rows returned by prefix search.
const SEARCH_LIMIT: i64 = 20;

/// Database repository for all collection operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== PROFILE OPERATIONS ====================

    /// Create a new profile. Phone and birth date are normalized through the
    /// input masks so stored values are always in display form.
    pub async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<Profile, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let phone = request.phone.as_deref().map(masks::mask_phone);
        let birth_date = request.birth_date.as_deref().map(masks::mask_date);

        sqlx::query(
            "INSERT INTO profiles (id, username, email, psn_id, xbox_id, nintendo_id, steam_id, avatar_url, guild_id, birth_date, phone, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, NULL, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.username)
        .bind(&request.email)
        .bind(&request.psn_id)
        .bind(&request.xbox_id)
        .bind(&request.nintendo_id)
        .bind(&request.steam_id)
        .bind(&request.avatar_url)
        .bind(&birth_date)
        .bind(&phone)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Profile {
            id,
            username: request.username.clone(),
            email: request.email.clone(),
            psn_id: request.psn_id.clone(),
            xbox_id: request.xbox_id.clone(),
            nintendo_id: request.nintendo_id.clone(),
            steam_id: request.steam_id.clone(),
            avatar_url: request.avatar_url.clone(),
            guild_id: None,
            birth_date,
            phone,
            updated_at: now,
        })
    }

    /// Get a profile by ID.
    pub async fn get_profile(&self, id: &str) -> Result<Option<Profile>, AppError> {
        let row = sqlx::query(
            "SELECT id, username, email, psn_id, xbox_id, nintendo_id, steam_id, avatar_url, guild_id, birth_date, phone, updated_at FROM profiles WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(profile_from_row))
    }

    /// Update a profile. Missing fields keep their current value.
    pub async fn update_profile(
        &self,
        id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<Profile, AppError> {
        let existing = self
            .get_profile(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        let username = request.username.as_ref().unwrap_or(&existing.username);
        let email = request.email.clone().or(existing.email.clone());
        let psn_id = request.psn_id.clone().or(existing.psn_id.clone());
        let xbox_id = request.xbox_id.clone().or(existing.xbox_id.clone());
        let nintendo_id = request.nintendo_id.clone().or(existing.nintendo_id.clone());
        let steam_id = request.steam_id.clone().or(existing.steam_id.clone());
        let avatar_url = request.avatar_url.clone().or(existing.avatar_url.clone());
        let birth_date = request
            .birth_date
            .as_deref()
            .map(masks::mask_date)
            .or(existing.birth_date.clone());
        let phone = request
            .phone
            .as_deref()
            .map(masks::mask_phone)
            .or(existing.phone.clone());

        sqlx::query(
            "UPDATE profiles SET username = ?, email = ?, psn_id = ?, xbox_id = ?, nintendo_id = ?, steam_id = ?, avatar_url = ?, birth_date = ?, phone = ?, updated_at = ? WHERE id = ?"
        )
        .bind(username)
        .bind(&email)
        .bind(&psn_id)
        .bind(&xbox_id)
        .bind(&nintendo_id)
        .bind(&steam_id)
        .bind(&avatar_url)
        .bind(&birth_date)
        .bind(&phone)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Profile {
            id: id.to_string(),
            username: username.clone(),
            email,
            psn_id,
            xbox_id,
            nintendo_id,
            steam_id,
            avatar_url,
            guild_id: existing.guild_id,
            birth_date,
            phone,
            updated_at: now,
        })
    }

    /// Delete a profile along with every reference to it: the id is removed
    /// from the owning guild's members and from all party rosters, and the
    /// profile's own party and inventory rows go with it, in one transaction.
    ///
    /// A profile that owns a guild cannot be deleted; the guild would be left
    /// without an owner.
    pub async fn delete_profile(&self, id: &str) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        let profile = fetch_profile_tx(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

        if let Some(guild_id) = &profile.guild_id {
            if let Some(mut guild) = fetch_guild_tx(&mut tx, guild_id).await? {
                if guild.owner_id == id {
                    return Err(AppError::Conflict(format!(
                        "Profile {} owns guild {} and cannot be deleted",
                        id, guild.id
                    )));
                }
                guild.members.retain(|m| m != id);
                write_guild_members_tx(&mut tx, guild_id, &guild.members).await?;
            }
        }

        // Party members are stored as a JSON array of quoted ids, so a
        // substring match finds every roster the id appears in.
        let pattern = format!("%\"{}\"%", id);
        let rows = sqlx::query("SELECT owner_id, members FROM parties WHERE members LIKE ?")
            .bind(&pattern)
            .fetch_all(&mut *tx)
            .await?;

        for row in &rows {
            let owner_id: String = row.get("owner_id");
            let members_str: String = row.get("members");
            let mut members = parse_json_array(&members_str);
            members.retain(|m| m != id);

            let members_json = serde_json::to_string(&members).unwrap_or_default();
            sqlx::query("UPDATE parties SET members = ?, updated_at = ? WHERE owner_id = ?")
                .bind(&members_json)
                .bind(&now)
                .bind(&owner_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM parties WHERE owner_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM inventories WHERE owner_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Search profiles by username prefix, case-insensitive.
    pub async fn search_profiles(&self, prefix: &str) -> Result<Vec<Profile>, AppError> {
        let pattern = format!("{}%", escape_like(prefix));
        let rows = sqlx::query(
            r#"SELECT id, username, email, psn_id, xbox_id, nintendo_id, steam_id, avatar_url, guild_id, birth_date, phone, updated_at
               FROM profiles WHERE username LIKE ? ESCAPE '\'
               ORDER BY username LIMIT ?"#,
        )
        .bind(&pattern)
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(profile_from_row).collect())
    }

    // ==================== GUILD OPERATIONS ====================

    /// Create a new guild. The owner becomes the first member and their
    /// profile is stamped with the guild id in the same transaction.
    pub async fn create_guild(&self, request: &CreateGuildRequest) -> Result<Guild, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let owner = fetch_profile_tx(&mut tx, &request.owner_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Profile {} not found", request.owner_id))
            })?;

        if owner.guild_id.is_some() {
            return Err(AppError::Conflict(format!(
                "Profile {} already belongs to a guild",
                request.owner_id
            )));
        }

        let members = vec![request.owner_id.clone()];
        let members_json = serde_json::to_string(&members).unwrap_or_default();

        sqlx::query(
            "INSERT INTO guilds (id, name, war_cry, description, banner_url, owner_id, members, posts, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, '[]', ?)"
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.war_cry)
        .bind(&request.description)
        .bind(&request.banner_url)
        .bind(&request.owner_id)
        .bind(&members_json)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        stamp_profile_guild_tx(&mut tx, &request.owner_id, Some(&id), &now).await?;

        tx.commit().await?;

        Ok(Guild {
            id,
            name: request.name.clone(),
            war_cry: request.war_cry.clone(),
            description: request.description.clone(),
            banner_url: request.banner_url.clone(),
            owner_id: request.owner_id.clone(),
            members,
            posts: Vec::new(),
            created_at: now,
        })
    }

    /// Get a guild by ID.
    pub async fn get_guild(&self, id: &str) -> Result<Option<Guild>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, war_cry, description, banner_url, owner_id, members, posts, created_at FROM guilds WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(guild_from_row))
    }

    /// List all guilds.
    pub async fn list_guilds(&self) -> Result<Vec<Guild>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, war_cry, description, banner_url, owner_id, members, posts, created_at FROM guilds ORDER BY name"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(guild_from_row).collect())
    }

    /// Add a user to a guild and stamp their profile, atomically.
    pub async fn join_guild(&self, guild_id: &str, user_id: &str) -> Result<Guild, AppError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        let mut guild = fetch_guild_tx(&mut tx, guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))?;

        let profile = fetch_profile_tx(&mut tx, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", user_id)))?;

        if profile.guild_id.is_some() {
            return Err(AppError::Conflict(format!(
                "Profile {} already belongs to a guild",
                user_id
            )));
        }

        // Set semantics: the stamp check above already rules out duplicates,
        // but membership is re-checked against the array itself.
        if !guild.members.iter().any(|m| m == user_id) {
            guild.members.push(user_id.to_string());
        }

        write_guild_members_tx(&mut tx, guild_id, &guild.members).await?;
        stamp_profile_guild_tx(&mut tx, user_id, Some(guild_id), &now).await?;

        tx.commit().await?;

        Ok(guild)
    }

    /// Remove a user from a guild and clear their profile stamp, atomically.
    ///
    /// Removing an id that is not in the members array is a no-op, and the
    /// profile stamp is cleared only when it points at this guild. Leaving a
    /// guild the user never joined cannot detach them from the one they
    /// belong to.
    pub async fn leave_guild(&self, guild_id: &str, user_id: &str) -> Result<Guild, AppError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        let mut guild = fetch_guild_tx(&mut tx, guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))?;

        if guild.owner_id == user_id {
            return Err(AppError::Validation(
                "The guild owner cannot leave their own guild".to_string(),
            ));
        }

        let was_member = guild.members.iter().any(|m| m == user_id);
        if was_member {
            guild.members.retain(|m| m != user_id);
            write_guild_members_tx(&mut tx, guild_id, &guild.members).await?;
        }

        if let Some(profile) = fetch_profile_tx(&mut tx, user_id).await? {
            if profile.guild_id.as_deref() == Some(guild_id) {
                stamp_profile_guild_tx(&mut tx, user_id, None, &now).await?;
            }
        }

        tx.commit().await?;

        Ok(guild)
    }

    /// Search guilds by name prefix, case-insensitive.
    pub async fn search_guilds(&self, prefix: &str) -> Result<Vec<Guild>, AppError> {
        let pattern = format!("{}%", escape_like(prefix));
        let rows = sqlx::query(
            r#"SELECT id, name, war_cry, description, banner_url, owner_id, members, posts, created_at
               FROM guilds WHERE name LIKE ? ESCAPE '\'
               ORDER BY name LIMIT ?"#,
        )
        .bind(&pattern)
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(guild_from_row).collect())
    }

    // ==================== PARTY OPERATIONS ====================

    /// Get the party led by the given user, creating an empty one if needed.
    pub async fn get_or_create_party(&self, owner_id: &str) -> Result<Party, AppError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT OR IGNORE INTO parties (owner_id, members, updated_at) VALUES (?, '[]', ?)")
            .bind(owner_id)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        let row = sqlx::query("SELECT owner_id, members, updated_at FROM parties WHERE owner_id = ?")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(party_from_row(&row))
    }

    /// Toggle a user's membership in a party: remove the id if present, add
    /// it otherwise. The resulting flag is computed from the committed row,
    /// never flipped optimistically.
    pub async fn toggle_party_member(
        &self,
        owner_id: &str,
        user_id: &str,
    ) -> Result<MembershipState, AppError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT OR IGNORE INTO parties (owner_id, members, updated_at) VALUES (?, '[]', ?)")
            .bind(owner_id)
            .bind(&now)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query("SELECT members FROM parties WHERE owner_id = ?")
            .bind(owner_id)
            .fetch_one(&mut *tx)
            .await?;

        let members_str: String = row.get("members");
        let mut members = parse_json_array(&members_str);

        let member = if members.iter().any(|m| m == user_id) {
            members.retain(|m| m != user_id);
            false
        } else {
            members.push(user_id.to_string());
            true
        };

        let members_json = serde_json::to_string(&members).unwrap_or_default();
        sqlx::query("UPDATE parties SET members = ?, updated_at = ? WHERE owner_id = ?")
            .bind(&members_json)
            .bind(&now)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(MembershipState { member, members })
    }

    // ==================== POST OPERATIONS ====================

    /// Create a post and append its id to the owning guild's feed.
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        let mut guild = fetch_guild_tx(&mut tx, &request.guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", request.guild_id)))?;

        sqlx::query(
            "INSERT INTO posts (id, guild_id, author_id, content, media_url, created_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.guild_id)
        .bind(&request.author_id)
        .bind(&request.content)
        .bind(&request.media_url)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        guild.posts.push(id.clone());
        let posts_json = serde_json::to_string(&guild.posts).unwrap_or_default();
        sqlx::query("UPDATE guilds SET posts = ? WHERE id = ?")
            .bind(&posts_json)
            .bind(&request.guild_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Post {
            id,
            guild_id: request.guild_id.clone(),
            author_id: request.author_id.clone(),
            content: request.content.clone(),
            media_url: request.media_url.clone(),
            created_at: now,
        })
    }

    /// Get a post by ID.
    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        let row = sqlx::query(
            "SELECT id, guild_id, author_id, content, media_url, created_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(post_from_row))
    }

    /// List a guild's posts, newest first.
    pub async fn list_guild_posts(&self, guild_id: &str) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query(
            "SELECT id, guild_id, author_id, content, media_url, created_at FROM posts WHERE guild_id = ? ORDER BY created_at DESC"
        )
        .bind(guild_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(post_from_row).collect())
    }

    /// Delete a post and remove its id from the owning guild's feed.
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT guild_id FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let guild_id: String = match row {
            Some(row) => row.get("guild_id"),
            None => return Err(AppError::NotFound(format!("Post {} not found", id))),
        };

        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if let Some(mut guild) = fetch_guild_tx(&mut tx, &guild_id).await? {
            guild.posts.retain(|p| p != id);
            let posts_json = serde_json::to_string(&guild.posts).unwrap_or_default();
            sqlx::query("UPDATE guilds SET posts = ? WHERE id = ?")
                .bind(&posts_json)
                .bind(&guild_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    // ==================== INVENTORY OPERATIONS ====================

    /// Get a user's inventory, creating an empty one if needed.
    pub async fn get_or_create_inventory(&self, owner_id: &str) -> Result<Inventory, AppError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT OR IGNORE INTO inventories (owner_id, game_ids, updated_at) VALUES (?, '[]', ?)",
        )
        .bind(owner_id)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let row =
            sqlx::query("SELECT owner_id, game_ids, updated_at FROM inventories WHERE owner_id = ?")
                .bind(owner_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(inventory_from_row(&row))
    }

    /// Add a game id to an inventory. Adding an id already present is a no-op.
    pub async fn add_inventory_game(
        &self,
        owner_id: &str,
        game_id: i64,
    ) -> Result<Inventory, AppError> {
        self.mutate_inventory(owner_id, |ids| {
            if !ids.contains(&game_id) {
                ids.push(game_id);
            }
        })
        .await
    }

    /// Remove a game id from an inventory. Removing an absent id is a no-op.
    pub async fn remove_inventory_game(
        &self,
        owner_id: &str,
        game_id: i64,
    ) -> Result<Inventory, AppError> {
        self.mutate_inventory(owner_id, |ids| {
            ids.retain(|&g| g != game_id);
        })
        .await
    }

    /// Read-modify-write an inventory's id array inside a transaction.
    async fn mutate_inventory<F>(&self, owner_id: &str, mutate: F) -> Result<Inventory, AppError>
    where
        F: FnOnce(&mut Vec<i64>),
    {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT OR IGNORE INTO inventories (owner_id, game_ids, updated_at) VALUES (?, '[]', ?)",
        )
        .bind(owner_id)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query("SELECT game_ids FROM inventories WHERE owner_id = ?")
            .bind(owner_id)
            .fetch_one(&mut *tx)
            .await?;

        let ids_str: String = row.get("game_ids");
        let mut game_ids = parse_id_array(&ids_str);
        mutate(&mut game_ids);

        let ids_json = serde_json::to_string(&game_ids).unwrap_or_default();
        sqlx::query("UPDATE inventories SET game_ids = ?, updated_at = ? WHERE owner_id = ?")
            .bind(&ids_json)
            .bind(&now)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Inventory {
            owner_id: owner_id.to_string(),
            game_ids,
            updated_at: now,
        })
    }
}

// Transaction-scoped helpers

async fn fetch_profile_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    id: &str,
) -> Result<Option<Profile>, AppError> {
    let row = sqlx::query(
        "SELECT id, username, email, psn_id, xbox_id, nintendo_id, steam_id, avatar_url, guild_id, birth_date, phone, updated_at FROM profiles WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row.as_ref().map(profile_from_row))
}

async fn fetch_guild_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    id: &str,
) -> Result<Option<Guild>, AppError> {
    let row = sqlx::query(
        "SELECT id, name, war_cry, description, banner_url, owner_id, members, posts, created_at FROM guilds WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row.as_ref().map(guild_from_row))
}

async fn write_guild_members_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    guild_id: &str,
    members: &[String],
) -> Result<(), AppError> {
    let members_json = serde_json::to_string(members).unwrap_or_default();
    sqlx::query("UPDATE guilds SET members = ? WHERE id = ?")
        .bind(&members_json)
        .bind(guild_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

async fn stamp_profile_guild_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    user_id: &str,
    guild_id: Option<&str>,
    now: &str,
) -> Result<(), AppError> {
    sqlx::query("UPDATE profiles SET guild_id = ?, updated_at = ? WHERE id = ?")
        .bind(guild_id)
        .bind(now)
        .bind(user_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

// Helper functions for row conversion

fn profile_from_row(row: &sqlx::sqlite::SqliteRow) -> Profile {
    Profile {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        psn_id: row.get("psn_id"),
        xbox_id: row.get("xbox_id"),
        nintendo_id: row.get("nintendo_id"),
        steam_id: row.get("steam_id"),
        avatar_url: row.get("avatar_url"),
        guild_id: row.get("guild_id"),
        birth_date: row.get("birth_date"),
        phone: row.get("phone"),
        updated_at: row.get("updated_at"),
    }
}

fn guild_from_row(row: &sqlx::sqlite::SqliteRow) -> Guild {
    let members_str: String = row.get("members");
    let posts_str: String = row.get("posts");
    Guild {
        id: row.get("id"),
        name: row.get("name"),
        war_cry: row.get("war_cry"),
        description: row.get("description"),
        banner_url: row.get("banner_url"),
        owner_id: row.get("owner_id"),
        members: parse_json_array(&members_str),
        posts: parse_json_array(&posts_str),
        created_at: row.get("created_at"),
    }
}

fn party_from_row(row: &sqlx::sqlite::SqliteRow) -> Party {
    let members_str: String = row.get("members");
    Party {
        owner_id: row.get("owner_id"),
        members: parse_json_array(&members_str),
        updated_at: row.get("updated_at"),
    }
}

fn post_from_row(row: &sqlx::sqlite::SqliteRow) -> Post {
    Post {
        id: row.get("id"),
        guild_id: row.get("guild_id"),
        author_id: row.get("author_id"),
        content: row.get("content"),
        media_url: row.get("media_url"),
        created_at: row.get("created_at"),
    }
}

fn inventory_from_row(row: &sqlx::sqlite::SqliteRow) -> Inventory {
    let ids_str: String = row.get("game_ids");
    Inventory {
        owner_id: row.get("owner_id"),
        game_ids: parse_id_array(&ids_str),
        updated_at: row.get("updated_at"),
    }
}

fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

fn parse_id_array(s: &str) -> Vec<i64> {
    serde_json::from_str(s).unwrap_or_default()
}

/// Escape LIKE wildcards so a prefix query matches literally.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
    }
}

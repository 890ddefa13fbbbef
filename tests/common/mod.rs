//! Shared fixtures for integration tests: a migrated SQLite file living in a
//! temporary directory that is removed when [`TestDb`] is dropped.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use pushkind_trips::db::{DbPool, establish_connection_pool};
use pushkind_trips::repository::DieselRepository;
use pushkind_trips::schema::{countries, country_trip, trips};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

/// Trip row inserted directly into the database; trips are never created
/// through the API.
pub struct TripSeed<'a> {
    pub id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub max_people: i32,
    pub countries: &'a [(i32, &'a str)],
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("non utf-8 temp path"))
            .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    pub fn seed_trip(&self, seed: TripSeed<'_>) {
        let mut conn = self.pool.get().expect("failed to get connection");

        diesel::insert_into(trips::table)
            .values((
                trips::id.eq(seed.id),
                trips::name.eq(seed.name),
                trips::description.eq(seed.description),
                trips::date_from.eq(date(2026, 6, seed.id as u32)),
                trips::date_to.eq(date(2026, 7, seed.id as u32)),
                trips::max_people.eq(seed.max_people),
            ))
            .execute(&mut conn)
            .expect("failed to insert trip");

        for &(country_id, country_name) in seed.countries {
            diesel::insert_or_ignore_into(countries::table)
                .values((countries::id.eq(country_id), countries::name.eq(country_name)))
                .execute(&mut conn)
                .expect("failed to insert country");
            diesel::insert_into(country_trip::table)
                .values((
                    country_trip::country_id.eq(country_id),
                    country_trip::trip_id.eq(seed.id),
                ))
                .execute(&mut conn)
                .expect("failed to link country");
        }
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

mod favorite_source;

pub use favorite_source::SqliteFavoriteSourceRepository;

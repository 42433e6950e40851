use super::*;
use diesel::dsl::{exists, not, sql};
use diesel::sql_types::{BigInt, Double};

diesel::table! {
    photos (id) {
        id -> Integer,
        name -> Text,
        content_type -> Text,
        image -> Bytea,
        created_at -> Timestamptz,
    }
}

#[derive(Queryable)]
#[diesel(table_name = photos)]
struct PhotoPrivate {
    id: i32,
    name: String,
    content_type: String,
    image: Vec<u8>,
    created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = photos)]
struct PhotoPrivateNew {
    name: String,
    content_type: String,
    image: Vec<u8>,
}

type SummaryRow = (i32, String, String, i64, DateTime<Utc>);

fn private_to_public(p: PhotoPrivate) -> Result<PhotoRecord, StoreError> {
    use conversions::*;
    Ok(PhotoRecord {
        photo_id: i32_to_u32(p.id)?,
        name: p.name,
        content_type: p.content_type,
        image: p.image,
        created_at: p.created_at,
    })
}

fn summary_to_public(row: SummaryRow) -> Result<PhotoSummary, StoreError> {
    use conversions::*;
    let (row_id, row_name, row_content_type, row_size, row_created_at) = row;
    Ok(PhotoSummary {
        photo_id: i32_to_u32(row_id)?,
        name: row_name,
        content_type: row_content_type,
        byte_size: i64_to_u64(row_size)?,
        created_at: row_created_at,
    })
}

fn build_new_row(p: NewPhoto) -> PhotoPrivateNew {
    PhotoPrivateNew {
        name: p.name,
        content_type: p.content_type,
        image: p.image,
    }
}

fn query_error(err: diesel::result::Error) -> StoreError {
    match err {
        diesel::result::Error::NotFound => StoreError::NotFound,
        other => StoreError::Query(other.to_string()),
    }
}

pub fn insert_photo(conn: &mut PgConnection, new_photo: NewPhoto) -> Result<PhotoRecord, StoreError> {
    use self::photos::dsl::*;

    let insert_row = build_new_row(new_photo);

    diesel::insert_into(photos)
        .values(&insert_row)
        .get_result::<PhotoPrivate>(conn)
        .map_err(query_error)
        .and_then(private_to_public)
}

pub fn get_photo_by_id(conn: &mut PgConnection, row_id: u32) -> Result<PhotoRecord, StoreError> {
    use self::photos::dsl::*;

    // an id that does not fit the column cannot exist
    let row_id = conversions::u32_to_i32(row_id).map_err(|_| StoreError::NotFound)?;

    photos
        .filter(id.eq(row_id))
        .first::<PhotoPrivate>(conn)
        .map_err(query_error)
        .and_then(private_to_public)
}

pub fn get_photos_newest_first(conn: &mut PgConnection) -> Result<Vec<PhotoSummary>, StoreError> {
    use self::photos::dsl::*;

    let rows: Vec<SummaryRow> = photos
        .select((
            id,
            name,
            content_type,
            sql::<BigInt>("octet_length(image)::bigint"),
            created_at,
        ))
        .order((created_at.desc(), id.desc()))
        .load(conn)
        .map_err(query_error)?;

    rows.into_iter()
        .map(summary_to_public)
        .collect::<Result<Vec<PhotoSummary>, StoreError>>()
}

/// Picks one photo at random among those not excluded, using `ORDER BY RANDOM() LIMIT 1`.
/// Returns Ok(None) if no photo qualifies.
pub fn get_random_photo_id_excluding(
    conn: &mut PgConnection,
    excluded: &[u32],
) -> Result<Option<u32>, StoreError> {
    use self::photos::dsl::*;

    let excluded = conversions::u32s_to_i32s(excluded);

    let row_id: Option<i32> = photos
        .select(id)
        .filter(not(id.eq_any(excluded)))
        .order(sql::<Double>("RANDOM()"))
        .first::<i32>(conn)
        .optional()
        .map_err(query_error)?;

    row_id.map(conversions::i32_to_u32).transpose()
}

pub fn get_count_photos_excluding(
    conn: &mut PgConnection,
    excluded: &[u32],
) -> Result<u64, StoreError> {
    use self::photos::dsl::*;

    let excluded = conversions::u32s_to_i32s(excluded);

    photos
        .filter(not(id.eq_any(excluded)))
        .count()
        .get_result::<i64>(conn)
        .map_err(query_error)
        .and_then(conversions::i64_to_u64)
}

pub fn get_count_photos(conn: &mut PgConnection) -> Result<u64, StoreError> {
    use self::photos::dsl::*;

    photos
        .count()
        .get_result::<i64>(conn)
        .map_err(query_error)
        .and_then(conversions::i64_to_u64)
}

pub fn get_any_photos(conn: &mut PgConnection) -> Result<bool, StoreError> {
    use self::photos::dsl::*;

    diesel::select(exists(photos.select(id)))
        .get_result::<bool>(conn)
        .map_err(query_error)
}

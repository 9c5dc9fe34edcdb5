use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Encode, Sqlite, Type};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Nanosecond, zero-padded UTC text. Every stored value has the same width, so
/// `ORDER BY` on the column is chronological. Reads go through the regular
/// `OffsetDateTime` decoder.
const STORED_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbTime(pub OffsetDateTime);

impl DbTime {
    pub fn now() -> Self {
        DbTime(OffsetDateTime::now_utc())
    }

    pub fn to_stored(self) -> Result<String, time::error::Format> {
        self.0.to_offset(UtcOffset::UTC).format(STORED_FORMAT)
    }
}

impl Type<Sqlite> for DbTime {
    fn type_info() -> <Sqlite as Database>::TypeInfo {
        <String as Type<Sqlite>>::type_info()
    }
}

impl<'q> Encode<'q, Sqlite> for DbTime {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        let text = self.to_stored()?;
        <String as Encode<'q, Sqlite>>::encode(text, buf)
    }
}

//! Canned SQL statements for `/datastore_search_sql`.

/// Average CO2 emission (g/kWh) per hour for price area `DK1`, for the six hours
/// starting at the current UTC time, from the 5-minute prognosis dataset `co2emisprog`.
///
/// The statement is sent verbatim; the `+` is URL-encoded by the transport.
pub const EMISSIONS_SQL: &str = r#"
WITH
b AS (
  SELECT
    "Minutes5UTC",
    date_trunc('hour', "Minutes5UTC") as hourutc,
    date_trunc('hour', "Minutes5DK") AS hourdk,
    "PriceArea",
    "CO2Emission"
  FROM "co2emisprog"
  WHERE "PriceArea" = 'DK1'
  AND "Minutes5UTC" >= (current_timestamp at time zone 'UTC')
  AND "Minutes5UTC" < ((current_timestamp at time zone 'UTC') + INTERVAL '6 hours')
),
a AS (
  SELECT
    hourutc,
    CAST(AVG("CO2Emission") as INTEGER) AS CO2
  FROM b
  GROUP BY hourutc
  ORDER BY hourutc ASC LIMIT 6
)
SELECT distinct to_char(b.hourDK, 'HH24:MI') AS "Minutes5DK", b."PriceArea", b.hourDK,
a.CO2 as "CO2Emission"
FROM a INNER JOIN b ON a.hourutc = b.hourutc
ORDER BY b.hourDK ASC LIMIT 6
"#;

#[cfg(test)]
mod model_tests {
    use crate::{
        error::ConversionError,
        models::{Instant, TimeZoneId, TimestampRecord, WireTimestamp},
    };

    #[test]
    fn test_instant_from_millis() {
        let instant = Instant::from_millis(1661238000000).unwrap();
        assert_eq!(instant.as_millis(), 1661238000000);
        assert_eq!(instant.to_string(), "2022-08-23T07:00:00Z");
        assert_eq!(Instant::UNIX_EPOCH.as_millis(), 0);
    }

    #[test]
    fn test_instant_out_of_range() {
        let err = Instant::from_millis(i64::MAX).unwrap_err();
        assert!(matches!(err, ConversionError::OutOfRange { .. }));
        assert!(Instant::from_millis(i64::MIN).is_err());
    }

    #[test]
    fn test_instant_now_is_millisecond_granular() {
        let now = Instant::now().unwrap();
        assert_eq!(now.as_timestamp().subsec_nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn test_instant_accepts_last_millisecond() {
        let latest = Instant::from_millis(253_402_207_200_999).unwrap();
        assert_eq!(latest.as_millis(), 253_402_207_200_999);
        assert_eq!(Instant::max().unwrap(), latest);
        assert_eq!(latest.to_string(), "9999-12-30T22:00:00.999Z");
        assert!(Instant::from_millis(253_402_207_201_000).is_err());
    }

    #[test]
    fn test_truncate_floors_sub_millisecond_part() {
        let before_epoch = jiff::Timestamp::new(-1, -500).unwrap();
        assert_eq!(Instant::truncate(before_epoch).unwrap().as_millis(), -1001);

        let after_epoch = jiff::Timestamp::new(1, 999_999).unwrap();
        assert_eq!(Instant::truncate(after_epoch).unwrap().as_millis(), 1000);

        let last = Instant::truncate(jiff::Timestamp::MAX).unwrap();
        assert_eq!(last.as_millis(), 253_402_207_200_999);
    }

    #[test]
    fn test_instant_serde_as_millis() {
        let instant = Instant::from_millis(1647136860000).unwrap();
        assert_eq!(serde_json::to_string(&instant).unwrap(), "1647136860000");
        let back: Instant = serde_json::from_str("1647136860000").unwrap();
        assert_eq!(back, instant);
        assert!(serde_json::from_str::<Instant>("9223372036854775807").is_err());
    }

    #[test]
    fn test_instant_ordering() {
        let a = Instant::from_millis(-5).unwrap();
        let b = Instant::from_millis(5).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_wire_timestamp_validation() {
        assert!(WireTimestamp::new(0, 0).is_ok());
        assert!(WireTimestamp::new(0, 999_999_999).is_ok());
        assert!(WireTimestamp::new(0, 1_000_000_000).is_err());
        assert!(WireTimestamp::new(0, -1).is_err());
        assert!(WireTimestamp::new(i64::MAX, 0).is_err());
    }

    #[test]
    fn test_wire_timestamp_json_shape() {
        let wire = WireTimestamp::new(1661238000, 123_000_000).unwrap();
        assert_eq!(
            serde_json::to_string(&wire).unwrap(),
            r#"{"seconds":1661238000,"nanos":123000000}"#
        );

        let parsed: WireTimestamp = serde_json::from_str(r#"{"seconds":5}"#).unwrap();
        assert_eq!(parsed.nanos(), 0);
        assert!(serde_json::from_str::<WireTimestamp>(r#"{"seconds":5,"nanos":-3}"#).is_err());
    }

    #[test]
    fn test_wire_from_instant_before_epoch() {
        let wire = WireTimestamp::from(Instant::from_millis(-1500).unwrap());
        assert_eq!(wire.seconds(), -2);
        assert_eq!(wire.nanos(), 500_000_000);
        assert_eq!(Instant::try_from(wire).unwrap().as_millis(), -1500);
    }

    #[test]
    fn test_zone_id_resolve() {
        assert!(TimeZoneId::utc().resolve().is_ok());
        assert!(TimeZoneId::new("America/Los_Angeles").resolve().is_ok());

        let err = TimeZoneId::new("Not/AZone").resolve().unwrap_err();
        assert!(matches!(err, ConversionError::UnknownZone { ref zone, .. } if zone == "Not/AZone"));
    }

    #[test]
    fn test_zone_id_from_str_validates() {
        assert_eq!(
            "Europe/Berlin".parse::<TimeZoneId>().unwrap().as_str(),
            "Europe/Berlin"
        );
        assert!("Europe/Atlantis".parse::<TimeZoneId>().is_err());
        assert_eq!(TimeZoneId::default(), TimeZoneId::utc());
    }

    #[test]
    fn test_record_with_both() {
        let instant = Instant::from_millis(1661238000000).unwrap();
        let record = TimestampRecord::with_both(instant);
        assert_eq!(record.id, None);
        assert_eq!(record.ts_value, Some(instant));
        assert_eq!(record.dt_value, Some(instant));
    }
}

mod common;

#[cfg(test)]
pub mod model_tests {
    use super::common::*;

    use royalstay::models::*;

    #[test]
    fn test_booking_status_round_trips_as_str() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Active,
            BookingStatus::Cancelled,
        ] {
            let parsed: BookingStatus = status.as_str().parse().expect("known status");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_booking_status_rejects_unknown_values() {
        assert!("confirmed".parse::<BookingStatus>().is_err());
        assert!("".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_booking_status_defaults_to_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn test_payment_method_round_trips_as_str() {
        for method in PaymentMethod::ALL {
            let parsed: PaymentMethod = method.as_str().parse().expect("known method");
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_payment_method_parse_is_case_insensitive() {
        assert_eq!("CARD".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!("Upi".parse::<PaymentMethod>(), Ok(PaymentMethod::Upi));
        assert_eq!(
            "netbanking".parse::<PaymentMethod>(),
            Ok(PaymentMethod::Netbanking)
        );
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Card.label(), "Credit/Debit Card");
        assert_eq!(PaymentMethod::Upi.label(), "UPI Payment");
        assert_eq!(PaymentMethod::Netbanking.label(), "Net Banking");
    }

    #[test]
    fn test_hotel_matches_search_on_name_and_location() {
        let hotel = get_seed_hotel();

        assert!(hotel.matches_search("taj"));
        assert!(hotel.matches_search("Udaipur"));
        assert!(hotel.matches_search("RAJASTHAN"));
        assert!(!hotel.matches_search("Mumbai"));
    }

    #[test]
    fn test_hotel_matches_search_accepts_blank_terms() {
        let hotel = get_seed_hotel();

        assert!(hotel.matches_search(""));
        assert!(hotel.matches_search("   "));
    }

    #[test]
    fn test_booking_short_id_is_eight_chars() {
        let booking = get_seed_booking();

        assert_eq!(booking.short_id(), "40000000");
        assert_eq!(booking.short_id().len(), 8);
    }

    #[test]
    fn test_booking_is_active_tracks_status() {
        let mut booking = get_seed_booking();
        assert!(!booking.is_active());

        booking.status = BookingStatus::Active;
        assert!(booking.is_active());

        booking.status = BookingStatus::Cancelled;
        assert!(!booking.is_active());
    }

    #[test]
    fn test_contact_message_blank_field_detection() {
        let message = ContactMessageCreate {
            name: "A Guest".to_string(),
            email: "guest@example.com".to_string(),
            subject: "Reservation enquiry".to_string(),
            message: "Is the lake suite available in June?".to_string(),
        };

        assert!(!message.has_blank_fields());

        let blank_subject = ContactMessageCreate {
            subject: "   ".to_string(),
            ..message.clone()
        };
        assert!(blank_subject.has_blank_fields());

        let blank_name = ContactMessageCreate {
            name: String::new(),
            ..message
        };
        assert!(blank_name.has_blank_fields());
    }

    #[test]
    fn test_booking_query_is_empty_on_default() {
        let query = BookingQuery::default();
        assert!(query.is_empty());
    }

    #[test]
    fn test_booking_query_is_empty_ignores_pagination() {
        let query = BookingQuery {
            offset: Some(100),
            limit: Some(5),
            sort_by: Some(vec![Some(true), None]),
            ..Default::default()
        };

        assert!(
            query.is_empty(),
            "pagination and sorting are not filters"
        );
    }

    #[test]
    fn test_booking_query_is_not_empty_with_filters() {
        let booking = get_seed_booking();

        let query = BookingQuery {
            room_id: Some(booking.room_id),
            ..Default::default()
        };
        assert!(!query.is_empty());

        let query = BookingQuery {
            status: Some(BookingStatus::Active),
            ..Default::default()
        };
        assert!(!query.is_empty());
    }
}

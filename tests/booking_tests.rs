mod common;

#[cfg(test)]
pub mod booking_tests {
    use chrono::Days;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::common::*;

    use royalstay::booking::*;
    use royalstay::common::*;
    use royalstay::models::PaymentMethod;

    fn get_seed_draft() -> BookingDraft {
        BookingDraft {
            check_in: parse_date("2024-01-01"),
            check_out: parse_date("2024-01-04"),
            guests: 2,
            special_requests: String::new(),
            payment_method: PaymentMethod::Card,
        }
    }

    #[test]
    fn test_draft_starting_defaults() {
        let today = parse_date("2024-06-10");
        let draft = BookingDraft::starting(today);

        assert_eq!(draft.check_in, parse_date("2024-06-11"));
        assert_eq!(draft.check_out, parse_date("2024-06-12"));
        assert_eq!(draft.guests, 2);
        assert_eq!(draft.special_requests, "");
        assert_eq!(draft.payment_method, PaymentMethod::Card);
        assert_eq!(draft.nights(), 1);
    }

    #[test]
    fn test_draft_total_price_multiplies_rate_by_nights() {
        let room = get_seed_room();
        let draft = get_seed_draft();

        assert_eq!(draft.nights(), 3);
        assert_eq!(draft.total_price(&room), dec!(15000));
    }

    #[test]
    fn test_draft_nights_positive_for_valid_ranges() {
        let room = get_seed_room();

        for span in 1u64..=30 {
            let draft = BookingDraft {
                check_out: parse_date("2024-01-01") + Days::new(span),
                ..get_seed_draft()
            };

            assert!(draft.validate(&room).is_ok());
            assert_eq!(draft.nights(), span as i64);
        }
    }

    #[test]
    fn test_draft_validate_rejects_equal_dates() {
        let room = get_seed_room();
        let draft = BookingDraft {
            check_out: parse_date("2024-01-01"),
            ..get_seed_draft()
        };

        assert!(matches!(
            draft.validate(&room),
            Err(BookingError::InvalidStay)
        ));
    }

    #[test]
    fn test_draft_validate_rejects_inverted_dates() {
        let room = get_seed_room();
        let draft = BookingDraft {
            check_in: parse_date("2024-01-04"),
            check_out: parse_date("2024-01-01"),
            ..get_seed_draft()
        };

        assert!(matches!(
            draft.validate(&room),
            Err(BookingError::InvalidStay)
        ));
    }

    #[test]
    fn test_draft_validate_rejects_zero_guests() {
        let room = get_seed_room();
        let draft = BookingDraft {
            guests: 0,
            ..get_seed_draft()
        };

        assert!(matches!(
            draft.validate(&room),
            Err(BookingError::GuestCount {
                requested: 0,
                capacity: 4,
            })
        ));
    }

    #[test]
    fn test_draft_validate_rejects_guests_over_capacity() {
        let room = get_seed_room();
        let draft = BookingDraft {
            guests: room.capacity + 1,
            ..get_seed_draft()
        };

        assert!(matches!(
            draft.validate(&room),
            Err(BookingError::GuestCount { .. })
        ));
    }

    #[test]
    fn test_draft_validate_accepts_full_capacity() {
        let room = get_seed_room();
        let draft = BookingDraft {
            guests: room.capacity,
            ..get_seed_draft()
        };

        assert!(draft.validate(&room).is_ok());
    }

    #[test]
    fn test_flow_walks_steps_without_skipping() {
        let mut flow = BookingFlow::new();
        assert_eq!(flow.step(), Step::RoomDetails);

        flow.advance();
        assert_eq!(flow.step(), Step::GuestInfo);

        flow.advance();
        assert_eq!(flow.step(), Step::Payment);

        flow.retreat();
        assert_eq!(flow.step(), Step::GuestInfo);
    }

    #[test]
    fn test_flow_advance_is_noop_at_last_step() {
        let mut flow = BookingFlow::at_step(Step::Payment);
        flow.advance();

        assert_eq!(flow.step(), Step::Payment);
    }

    #[test]
    fn test_flow_retreat_is_noop_at_first_step() {
        let mut flow = BookingFlow::new();
        flow.retreat();

        assert_eq!(flow.step(), Step::RoomDetails);
    }

    #[test]
    fn test_flow_submission_requires_payment_step() {
        let mut flow = BookingFlow::new();

        assert!(matches!(
            flow.begin_submission(),
            Err(BookingError::NotAtPaymentStep)
        ));
    }

    #[test]
    fn test_flow_rejects_double_submission() {
        let mut flow = BookingFlow::at_step(Step::Payment);

        let ticket = flow.begin_submission().expect("first submission claim");
        assert!(flow.is_busy());

        assert!(matches!(
            flow.begin_submission(),
            Err(BookingError::SubmissionPending)
        ));

        assert!(flow.finish_submission(ticket));
        assert!(!flow.is_busy());
    }

    #[test]
    fn test_flow_allows_retry_after_settled_submission() {
        let mut flow = BookingFlow::at_step(Step::Payment);

        let ticket = flow.begin_submission().expect("first submission claim");
        assert!(flow.finish_submission(ticket));

        assert!(flow.begin_submission().is_ok());
    }

    #[test]
    fn test_flow_advance_blocked_while_busy() {
        let mut flow = BookingFlow::at_step(Step::GuestInfo);
        flow.advance();

        let _ticket = flow.begin_submission().expect("submission claim");
        flow.advance();

        assert_eq!(flow.step(), Step::Payment);
    }

    #[test]
    fn test_flow_retreat_abandons_pending_submission() {
        let mut flow = BookingFlow::at_step(Step::Payment);

        let ticket = flow.begin_submission().expect("submission claim");
        flow.retreat();

        assert_eq!(flow.step(), Step::GuestInfo);
        assert!(!flow.is_busy());

        // The abandoned submission's result must not touch the flow.
        assert!(!flow.finish_submission(ticket));
    }

    #[test]
    fn test_step_numbers_round_trip() {
        for n in 1u8..=Step::COUNT {
            let step = Step::from_number(n).expect("step in range");
            assert_eq!(step.number(), n);
        }

        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(Step::RoomDetails.label(), "Room Details");
        assert_eq!(Step::GuestInfo.label(), "Guest Information");
        assert_eq!(Step::Payment.label(), "Payment");
    }

    #[test]
    fn test_reservation_request_builds_insert_payload() {
        let room = get_seed_room();
        let draft = get_seed_draft();
        let user_id = Uuid::new_v4();

        let data = reservation_request(Some(user_id), Some(&room), &draft)
            .expect("valid reservation");

        assert_eq!(data.user_id, user_id);
        assert_eq!(data.room_id, room.id);
        assert_eq!(data.check_in_date, draft.check_in);
        assert_eq!(data.check_out_date, draft.check_out);
        assert_eq!(data.total_price, dec!(15000));
        assert_eq!(data.guest_count, 2);
    }

    #[test]
    fn test_reservation_request_rejects_missing_user() {
        let room = get_seed_room();
        let draft = get_seed_draft();

        assert!(matches!(
            reservation_request(None, Some(&room), &draft),
            Err(BookingError::Unauthenticated)
        ));
    }

    #[test]
    fn test_reservation_request_rejects_missing_room() {
        let draft = get_seed_draft();

        assert!(matches!(
            reservation_request(Some(Uuid::new_v4()), None, &draft),
            Err(BookingError::NoRoomSelected)
        ));
    }

    #[test]
    fn test_reservation_request_rejects_invalid_draft() {
        let room = get_seed_room();
        let draft = BookingDraft {
            check_out: parse_date("2024-01-01"),
            ..get_seed_draft()
        };

        assert!(matches!(
            reservation_request(Some(Uuid::new_v4()), Some(&room), &draft),
            Err(BookingError::InvalidStay)
        ));
    }

    #[test]
    fn test_booking_error_retryability() {
        assert!(BookingError::SubmissionPending.is_retryable());
        assert!(BookingError::Fetch(sqlx::Error::RowNotFound).is_retryable());
        assert!(BookingError::Submission(sqlx::Error::RowNotFound).is_retryable());

        assert!(!BookingError::InvalidStay.is_retryable());
        assert!(!BookingError::Unauthenticated.is_retryable());
        assert!(!BookingError::NoRoomSelected.is_retryable());
    }

    #[test]
    fn test_total_price_scales_with_rate() {
        let mut room = get_seed_room();
        room.price_per_night = dec!(123.50);

        let draft = BookingDraft {
            check_out: parse_date("2024-01-03"),
            ..get_seed_draft()
        };

        assert_eq!(draft.total_price(&room), dec!(247.00));
        assert_eq!(
            draft.total_price(&room),
            room.price_per_night * Decimal::from(draft.nights())
        );
    }
}

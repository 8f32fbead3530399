pub mod stat_card;

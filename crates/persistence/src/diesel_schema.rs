// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    workers (worker_id) {
        worker_id -> BigInt,
        email -> Text,
        doc -> Text,
    }
}

diesel::table! {
    employers (employer_id) {
        employer_id -> BigInt,
        email -> Text,
        doc -> Text,
    }
}

diesel::table! {
    flexpools (flexpool_id) {
        flexpool_id -> BigInt,
        employer_id -> BigInt,
        doc -> Text,
    }
}

diesel::table! {
    postings (posting_id) {
        posting_id -> BigInt,
        employer_id -> BigInt,
        status -> Text,
        start_at_unix -> BigInt,
        doc -> Text,
    }
}

diesel::table! {
    slots (slot_id) {
        slot_id -> BigInt,
        posting_id -> BigInt,
        employer_id -> BigInt,
        worker_id -> Nullable<BigInt>,
        status -> Text,
        start_at_unix -> BigInt,
        start_date -> Text,
        doc -> Text,
    }
}

diesel::table! {
    invoices (invoice_id) {
        invoice_id -> BigInt,
        party_kind -> Text,
        party_id -> BigInt,
        year -> Integer,
        week -> Integer,
        doc -> Text,
    }
}

diesel::joinable!(flexpools -> employers (employer_id));
diesel::joinable!(postings -> employers (employer_id));
diesel::joinable!(slots -> postings (posting_id));
diesel::joinable!(slots -> employers (employer_id));
diesel::joinable!(slots -> workers (worker_id));

diesel::allow_tables_to_appear_in_same_query!(
    workers,
    employers,
    flexpools,
    postings,
    slots,
    invoices,
);

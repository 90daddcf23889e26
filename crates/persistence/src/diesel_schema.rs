// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    championnats (id) {
        id -> Integer,
        season -> Nullable<Text>,
        phase -> Nullable<Text>,
        commentaires -> Nullable<Text>,
        created -> Nullable<Text>,
        updated -> Nullable<Text>,
        deleted -> Nullable<Text>,
    }
}

diesel::table! {
    clubs (id) {
        id -> Integer,
        club_name -> Nullable<Text>,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        commentaires -> Nullable<Text>,
        marker_size -> Nullable<Integer>,
        created -> Nullable<Text>,
        updated -> Nullable<Text>,
        deleted -> Nullable<Text>,
    }
}

diesel::table! {
    groupes (id) {
        id -> Integer,
        club_id -> Nullable<Integer>,
        championnat_id -> Nullable<Integer>,
        groupe -> Nullable<Text>,
        commentaires -> Nullable<Text>,
        created -> Nullable<Text>,
        updated -> Nullable<Text>,
        deleted -> Nullable<Text>,
    }
}

diesel::table! {
    trainings (id) {
        id -> Integer,
        club_id -> Nullable<Integer>,
        jour_entrainement -> Nullable<Text>,
        debut_entrainement -> Nullable<Text>,
        fin_entrainement -> Nullable<Text>,
        commentaires -> Nullable<Text>,
        created -> Nullable<Text>,
        updated -> Nullable<Text>,
        deleted -> Nullable<Text>,
    }
}

diesel::joinable!(groupes -> championnats (championnat_id));
diesel::joinable!(groupes -> clubs (club_id));
diesel::joinable!(trainings -> clubs (club_id));

diesel::allow_tables_to_appear_in_same_query!(championnats, clubs, groupes, trainings,);

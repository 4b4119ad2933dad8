#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;
use diesel::prelude::*;

#[derive(Insertable)]
#[diesel(table_name = address)]
pub struct NewAddress<'a> {
    pub id: &'a str,
    pub user_address: &'a str,
    pub user_name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: Option<&'a str>,
    pub postal_code: &'a str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub map_url: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = address, treat_none_as_null = true)]
pub struct AddressChangeset<'a> {
    pub user_address: &'a str,
    pub user_name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: Option<&'a str>,
    pub postal_code: &'a str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub map_url: Option<&'a str>,
}

#[derive(Queryable)]
pub struct Address {
    pub rowid: i64,
    pub id: String,
    pub user_address: String,
    pub user_name: String,
    pub city: String,
    pub state: String,
    pub country: Option<String>,
    pub postal_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub map_url: Option<String>,
}

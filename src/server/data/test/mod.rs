mod bid;
mod user;

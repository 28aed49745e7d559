mod catalog;
mod game;
mod user;

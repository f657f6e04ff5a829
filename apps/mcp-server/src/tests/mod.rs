mod arguments;
mod catalog;
mod format;
mod logger;
mod protocol;

pub mod faq_list;

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared notification fixtures.

/// A realistic single-room `OTA_HotelResNotifRQ` as sent by a channel
/// manager, WS-Security header included.
pub const SINGLE_ROOM_NOTIFICATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap-env:Envelope xmlns:soap-env="http://schemas.xmlsoap.org/soap/envelope/">
 <soap-env:Header>
  <wsse:Security xmlns:wsse="http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd">
   <wsse:UsernameToken>
    <wsse:Username>siteminder</wsse:Username>
    <wsse:Password>test-api-key</wsse:Password>
   </wsse:UsernameToken>
  </wsse:Security>
 </soap-env:Header>
 <soap-env:Body>
  <OTA_HotelResNotifRQ xmlns="http://www.opentravel.org/OTA/2003/05" EchoToken="echo-abc-123" TimeStamp="2026-03-01T10:00:00Z" Version="1.0">
   <HotelReservations>
    <HotelReservation>
     <RoomStays>
      <RoomStay>
       <RoomTypes>
        <RoomType RoomTypeCode="DLX" RoomType="Deluxe" RoomID="101">
         <RoomDescription>
          <Text>Deluxe King Room</Text>
         </RoomDescription>
        </RoomType>
       </RoomTypes>
       <GuestCounts>
        <GuestCount AgeQualifyingCode="10" Count="2"/>
        <GuestCount AgeQualifyingCode="8" Count="1"/>
       </GuestCounts>
       <TimeSpan Start="2026-03-01" End="2026-03-04"/>
      </RoomStay>
     </RoomStays>
     <ResGlobalInfo>
      <Profiles>
       <ProfileInfo>
        <Profile ProfileType="1">
         <Customer>
          <PersonName>
           <GivenName>Jane</GivenName>
           <Surname>Doe</Surname>
          </PersonName>
          <Telephone PhoneNumber="+1 (555) 123-4567"/>
          <Email>jane.doe@example.com</Email>
         </Customer>
        </Profile>
       </ProfileInfo>
      </Profiles>
      <Total AmountAfterTax="450.00" CurrencyCode="USD"/>
      <DepositPayments>
       <GuaranteePayment>
        <AmountPercent Percent="100"/>
       </GuaranteePayment>
      </DepositPayments>
      <HotelReservationIDs>
       <HotelReservationID ResID_Type="14" ResID_Value="SM-1001"/>
      </HotelReservationIDs>
     </ResGlobalInfo>
    </HotelReservation>
   </HotelReservations>
  </OTA_HotelResNotifRQ>
 </soap-env:Body>
</soap-env:Envelope>
"#;

/// A two-room notification with three adults and a partial deposit.
pub const MULTI_ROOM_NOTIFICATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soap-env:Envelope xmlns:soap-env="http://schemas.xmlsoap.org/soap/envelope/">
 <soap-env:Body>
  <OTA_HotelResNotifRQ xmlns="http://www.opentravel.org/OTA/2003/05" EchoToken="echo-multi" Version="1.0">
   <HotelReservations>
    <HotelReservation>
     <RoomStays>
      <RoomStay>
       <RoomTypes>
        <RoomType RoomTypeCode="DLX" RoomType="Deluxe" RoomID="101">
         <RoomDescription>
          <Text>Deluxe King Room</Text>
         </RoomDescription>
        </RoomType>
        <RoomType RoomTypeCode="STD" RoomType="Standard" RoomID="102">
         <RoomDescription>
          <Text>Standard Twin Room</Text>
         </RoomDescription>
        </RoomType>
       </RoomTypes>
       <GuestCounts>
        <GuestCount AgeQualifyingCode="10" Count="3"/>
       </GuestCounts>
       <TimeSpan Start="2026/4/1" End="2026/4/5"/>
      </RoomStay>
     </RoomStays>
     <ResGlobalInfo>
      <Profiles>
       <ProfileInfo>
        <Profile>
         <Customer>
          <PersonName>
           <GivenName>Sam</GivenName>
           <Surname>Smith</Surname>
          </PersonName>
         </Customer>
        </Profile>
       </ProfileInfo>
      </Profiles>
      <Total AmountAfterTax="900.00" CurrencyCode="USD"/>
      <DepositPayments>
       <GuaranteePayment>
        <AmountPercent Percent="50"/>
       </GuaranteePayment>
      </DepositPayments>
      <HotelReservationIDs>
       <HotelReservationID ResID_Type="14" ResID_Value="SM-2002"/>
      </HotelReservationIDs>
     </ResGlobalInfo>
    </HotelReservation>
   </HotelReservations>
  </OTA_HotelResNotifRQ>
 </soap-env:Body>
</soap-env:Envelope>
"#;
